pub mod ds3231;
pub mod rm3100;

/// Errors produced by one measurement sequence. A failed sequence loses
/// the current sample only; the next call starts from a fresh trigger.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeasurementError<E> {
    /// A bus transaction failed. Short transfers surface here too: the
    /// transport reports them as errors, never as zero-padded data.
    Bus(E),
    /// The sensor had no completed measurement when its status register
    /// was checked.
    NotReady,
    /// The sensor never reported a completed measurement within the
    /// configured poll budget.
    Timeout,
}

impl<E> From<E> for MeasurementError<E> {
    fn from(e: E) -> MeasurementError<E> {
        MeasurementError::Bus(e)
    }
}
