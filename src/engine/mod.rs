pub(crate) mod incumbent;
pub(crate) mod propagation;
pub(crate) mod search;
pub mod termination;

mod assignments;
#[cfg(test)]
pub(crate) mod test_helper;

pub(crate) use assignments::Assignments;
