//! Process-wide bootstrap for the unit-test binary.
