use proptest::prelude::*;
use rangeband_rs::selection::{
    Handle, MIN_SELECTION_WIDTH_PX, PixelInterval, constrain_interval,
};

const PLOT_WIDTH: f64 = 500.0;

fn valid_interval() -> impl Strategy<Value = PixelInterval> {
    (0.0f64..(PLOT_WIDTH - MIN_SELECTION_WIDTH_PX)).prop_flat_map(|left| {
        ((left + MIN_SELECTION_WIDTH_PX)..=PLOT_WIDTH)
            .prop_map(move |right| PixelInterval::new(left, right))
    })
}

proptest! {
    #[test]
    fn resize_never_shrinks_below_minimum_width(
        interval in valid_interval(),
        proposed in 0.0f64..=PLOT_WIDTH,
        resize_end in proptest::bool::ANY,
    ) {
        let handle = if resize_end { Handle::End } else { Handle::Start };
        let out = constrain_interval(interval, handle, 0.0, proposed, PLOT_WIDTH);
        prop_assert!(out.width() >= MIN_SELECTION_WIDTH_PX - 1e-9);
    }

    #[test]
    fn resize_stays_inside_plot_bounds(
        interval in valid_interval(),
        proposed in 0.0f64..=PLOT_WIDTH,
        resize_end in proptest::bool::ANY,
    ) {
        let handle = if resize_end { Handle::End } else { Handle::Start };
        let out = constrain_interval(interval, handle, 0.0, proposed, PLOT_WIDTH);
        prop_assert!(out.left >= 0.0);
        prop_assert!(out.right <= PLOT_WIDTH);
        prop_assert!(out.left <= out.right);
    }

    #[test]
    fn move_preserves_width_and_bounds(
        interval in valid_interval(),
        anchor in 0.0f64..=PLOT_WIDTH,
        proposed in 0.0f64..=PLOT_WIDTH,
    ) {
        let out = constrain_interval(interval, Handle::Move, anchor, proposed, PLOT_WIDTH);
        prop_assert!((out.width() - interval.width()).abs() <= 1e-9);
        prop_assert!(out.left >= -1e-9);
        prop_assert!(out.right <= PLOT_WIDTH + 1e-9);
    }

    #[test]
    fn constraint_is_deterministic(
        interval in valid_interval(),
        anchor in 0.0f64..=PLOT_WIDTH,
        proposed in 0.0f64..=PLOT_WIDTH,
        move_handle in proptest::bool::ANY,
    ) {
        // The live-redraw path and the commit path evaluate the same
        // function on the same inputs; they must never diverge.
        let handle = if move_handle { Handle::Move } else { Handle::Start };
        let preview = constrain_interval(interval, handle, anchor, proposed, PLOT_WIDTH);
        let commit = constrain_interval(interval, handle, anchor, proposed, PLOT_WIDTH);
        prop_assert_eq!(preview, commit);
    }
}
