//! Input layer: joystick, attack button charge, swipe-to-jump.

use bevy::prelude::*;

pub mod events;
pub mod joystick;
pub mod swipe;
pub mod systems;

pub use events::PointerEvent;
pub use joystick::{Joystick, JoystickConfig};
pub use swipe::{SwipeConfig, SwipeDetector};
pub use systems::{advance_charge, process_pointer_events, publish_charge_progress};

use crate::config::GameConfig;
use crate::player::{ChargeGesture, ChargeProgress};
use crate::GameSet;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>();

        let config = app.world().resource::<GameConfig>().clone();
        app.insert_resource(Joystick::new(config.joystick))
            .insert_resource(SwipeDetector::new(config.swipe))
            .insert_resource(ChargeGesture::new(config.charge))
            .init_resource::<ChargeProgress>()
            .add_event::<PointerEvent>()
            .add_systems(
                FixedUpdate,
                (advance_charge, process_pointer_events, publish_charge_progress)
                    .chain()
                    .in_set(GameSet::Input),
            );
    }
}
