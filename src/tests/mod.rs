mod propagators;
mod properties;
