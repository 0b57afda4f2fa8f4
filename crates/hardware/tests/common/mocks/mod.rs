//! Mock device models.
