//! # cadastro-validation
//!
//! Validation and formatting for Brazilian registry identifiers: the CPF
//! taxpayer number and vehicle license plates.
//!
//! ## Design Principles
//!
//! - Validation is pure: no I/O, no shared state, every call independent
//! - Failures are ordinary values with a closed [`ValidationError`]
//!   taxonomy, never a panic
//! - Typed wrappers ([`Cpf`], [`Plate`]) carry proof of validation; the
//!   free functions are the thin unit/boolean surface over them
//!
//! ## Formats
//!
//! - CPF: 11 digits, the last two being check digits over a weighted mod-11
//!   sum; accepted with or without `DDD.DDD.DDD-DD` punctuation
//! - Legacy plate: `ABC1234` or `ABC-1234`
//! - Mercosul plate: `ABC1D23`
//!
//! ```
//! use cadastro_validation::{is_plate_valid, validate_cpf, Cpf};
//!
//! assert!(validate_cpf("111.444.777-35").is_ok());
//! assert!(is_plate_valid("ABC1D23"));
//!
//! let cpf: Cpf = "11144477735".parse()?;
//! assert_eq!(cpf.to_string(), "111.444.777-35");
//! # Ok::<(), cadastro_validation::ValidationError>(())
//! ```

mod cpf;
mod error;
mod plate;

pub use cpf::{format_cpf, is_cpf_valid, validate_cpf, Cpf, CPF_LENGTH};
pub use error::{ValidationError, ValidationErrorKind};
pub use plate::{is_plate_valid, validate_plate, Plate, PlateFormat};
