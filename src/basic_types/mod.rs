mod propagation_status;
mod structural_error;

pub use propagation_status::EmptyDomain;
pub use propagation_status::Inconsistency;
pub(crate) use propagation_status::PropagationStatus;
pub use structural_error::StructuralError;

pub(crate) type HashMap<K, V> = fnv::FnvHashMap<K, V>;
