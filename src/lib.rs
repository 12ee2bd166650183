//! gh-secrets - manage encrypted GitHub Actions secrets from the command line.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── list          # List secrets for a target
//! │   ├── show          # Show a single secret
//! │   ├── set           # Encrypt and submit a secret
//! │   ├── set_all       # Batch set from a dotenv-style file
//! │   ├── delete        # Delete a secret
//! │   └── output        # Colored terminal output helpers
//! └── core/             # Core library components
//!     ├── api           # GitHub REST client + response envelope
//!     ├── config        # Credentials from ~/.gh-secrets + environment
//!     ├── crypto        # Sealed-box encryption
//!     ├── env           # Dotenv-style batch file reading
//!     └── target        # URL → org/repo target resolution
//! ```
//!
//! # Features
//!
//! - Repository- and organization-level secret management
//! - Local sealed-box encryption (X25519, libsodium-compatible)
//! - Batch import from .env files with independent per-line dispatch
//! - Uniform JSON envelopes for every remote call

pub mod cli;
pub mod core;
pub mod error;
