/// Environment variable pointing to the directory where generated files go
pub const GATUNER_DIR_VAR: &str = "GATUNER_DIR";

/// Sub directory (relative to `GATUNER_DIR`) holding every generated artefact
pub const DATA_GENERATED: &str = "data_generated";

/// Sub directory of `DATA_GENERATED` for progress plots
pub const PLOTS: &str = "plots";

/// Sub directory of `DATA_GENERATED` for per-generation CSV records
pub const RECORDS: &str = "records";
