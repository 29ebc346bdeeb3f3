//! Workspace-level integration tests for SpinWheel live in `tests/`.
