/// Opaque patient identifier as delivered by the source.
/// Example: `DEMO001`
pub type PatientId = String;
/// One-based page number in the paginated collection.
pub type PageNumber = u32;
/// Human-readable failure reason carried inside error variants.
/// Examples: `http status 500`, `connection reset by peer`
pub type FailureReason = String;
