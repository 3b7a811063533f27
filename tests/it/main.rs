//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's
//! best practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - unit: single-component tests (engines, snapshots)
//! - integration: full gesture workflows end-to-end
