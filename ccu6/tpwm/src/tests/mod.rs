//! Register-level tests of the synchronization engine against the simulator
