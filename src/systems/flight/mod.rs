mod integrator;

pub use integrator::step;
