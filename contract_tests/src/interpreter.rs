//! Interpreter behavior and render-event shape contract
