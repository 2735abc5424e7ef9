//! Macros for ergonomic controller construction.

/// Build a custom controller from a label and a list of states.
///
/// Expands to a [`ControllerBuilder`](crate::builder::ControllerBuilder)
/// chain and evaluates to `Result<Controller, BuildError>`.
///
/// # Example
///
/// ```
/// use signalcycle::controller;
///
/// let light = controller!("Tram": STOP => 20, GO => 10).unwrap();
///
/// assert_eq!(light.label(), "Tram");
/// assert_eq!(light.current_color(), "STOP");
/// ```
#[macro_export]
macro_rules! controller {
    (
        $label:literal : $($color:ident => $secs:expr),+ $(,)?
    ) => {
        $crate::builder::ControllerBuilder::new()
            .label($label)
            $(.state(stringify!($color), $secs))+
            .build()
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::BuildError;
    use crate::core::StateError;

    #[test]
    fn controller_macro_builds_sequence() {
        let mut light = controller!("Urban": RED => 30, GREEN => 45, YELLOW => 5).unwrap();

        assert_eq!(light.state_count(), 3);
        light.advance();
        assert_eq!(light.current_color(), "GREEN");
        assert_eq!(light.current_duration(), 45);
    }

    #[test]
    fn controller_macro_accepts_trailing_comma() {
        let light = controller!("Beacon": AMBER => 1,).unwrap();
        assert_eq!(light.state_count(), 1);
    }

    #[test]
    fn controller_macro_surfaces_errors() {
        let result = controller!("Odd": EXTREMELY_LONG => 1);
        assert!(matches!(
            result,
            Err(BuildError::InvalidState(StateError::ColorTooLong { .. }))
        ));
    }
}
