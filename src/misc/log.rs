/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made at trace level during a check.
Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [entailment checking](crate::procedures::model_check).
    pub const CHECK: &str = "check";
}
