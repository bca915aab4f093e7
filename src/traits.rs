use crate::transfer::TransferFunction;

pub trait BasicFilter {
    /// Returns the polynomial coefficients of the filter transfer function in the z-plane.
    fn transfer_function(&self) -> TransferFunction;
    /// Perform one step of a filter.
    fn step(&mut self, x: f64) -> f64;
    /// Clear the filter memory, as if no sample had been seen.
    fn reset(&mut self);
}
