//! `strix-utdanninger` — educational programmes: entity, filter/paging
//! shapes, inputs, and the typed gateway operations.

pub mod operations;
pub mod utdanning;

pub use operations::{
    aktiver_utdanning, deaktiver_utdanning, hent_utdanninger, oppdater_utdanning,
    opprett_utdanning, slett_utdanning, UtdanningAktivStatus,
};
pub use utdanning::{
    OppdaterUtdanningInput, OpprettUtdanningInput, PageInput, Studieform, Utdanning,
    UtdanningFilter, UtdanningPage, UtdanningSammendrag,
};
