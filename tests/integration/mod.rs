//! Integration Tests Module
//!
//! End-to-end tests for the assessment wizard: full walkthroughs, the
//! backward edge, the failure path, and the single in-flight invariant.
//! All tests run against a scripted fake provider; no network calls are
//! made.

// Wizard controller flow tests
mod wizard_test;
