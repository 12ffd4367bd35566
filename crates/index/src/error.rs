use combo_sheets::SheetError;

/// All errors the resolution engine can produce.
///
/// Two classes share the enum. User errors are legitimate outcomes of a
/// well-formed lookup (bad ordinal, unknown pairing, no override on a
/// map); the command boundary renders them as an error reply. Structural
/// errors mean the sheet's layout or the engine's calling order no
/// longer matches assumptions; they propagate uncaught so the operator
/// notices instead of a user getting a misleading reply.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Ordinal outside `1..=total`. `ordinal` is pre-rendered with its
    /// suffix ("51st") for the user-facing message.
    #[error("You asked for the {ordinal} combo but there are only {available} listed.")]
    OrdinalOutOfRange { ordinal: String, available: u32 },

    /// No data row carries this (unordered) pair.
    #[error("{pair} isn't a combo yet.")]
    PairNotFound { pair: String },

    /// The combo exists but the override table has no row for this map.
    #[error("Combo #{number} exists but doesn't have an alt map on {map}.")]
    NoAltOnMap { number: u32, map: String },

    /// Two heroes can never form a combo.
    #[error("Can't have a combo with 2 heroes.")]
    TwoHeroes,

    /// Structural: the header marker was not found in its search window.
    /// The sheet layout changed incompatibly.
    #[error("cannot find the {marker:?} header in column {column} to orient combo searching")]
    HeaderNotFound { column: char, marker: String },

    /// Structural: the override scan ended without ever seeing the
    /// queried combo number. Primary resolution must precede override
    /// resolution, so this signals a lookup-order bug.
    #[error("override scan never saw combo #{number}; primary lookup must come first")]
    IndexNeverSeen { number: u32 },

    /// Structural: a matched primary row's NUMBER cell is not numeric.
    #[error("primary NUMBER cell {value:?} is not numeric")]
    BadNumberCell { value: String },

    /// Structural: the sheet backend failed.
    #[error(transparent)]
    Sheet(#[from] SheetError),
}

impl LookupError {
    /// True for errors that should be rendered to the user rather than
    /// propagated.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            LookupError::OrdinalOutOfRange { .. }
                | LookupError::PairNotFound { .. }
                | LookupError::NoAltOnMap { .. }
                | LookupError::TwoHeroes
        )
    }
}
