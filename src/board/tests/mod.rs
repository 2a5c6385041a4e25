//! Board unit and property tests.

mod proptest;
