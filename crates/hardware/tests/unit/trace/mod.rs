//! Waveform recorder tests.
