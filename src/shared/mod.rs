//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app`, `ui` und der Host gemeinsam lesen.

pub mod options;

pub use options::SliderOptions;
