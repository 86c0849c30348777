//! Game controllers (gilrs)

use game_core::{FrameInput, Side};
use gilrs::{Axis, GamepadId, Gilrs, GilrsBuilder};
use snafu::ResultExt;

use crate::error::{ControllersSnafu, StartupError};
use crate::input::axis_to_i16;
use crate::mappings::MappingDb;

/// An opened controller
#[derive(Debug, Clone)]
pub struct Controller {
    pub id: GamepadId,
    pub name: String,
}

/// Controller subsystem plus the two controllers driving the paddles
pub struct Controllers {
    // Fields drop in declaration order, the reverse of acquisition
    pads: Vec<Controller>,
    gilrs: Gilrs,
}

impl Controllers {
    /// Start the controller subsystem with the given mapping database
    pub fn init(mappings: &MappingDb) -> Result<Gilrs, StartupError> {
        let gilrs = GilrsBuilder::new()
            .add_mappings(mappings.text())
            .build()
            .context(ControllersSnafu)?;
        log::debug!("Loaded {} controller mappings", mappings.len());
        Ok(gilrs)
    }

    /// Open the first `count` connected controllers, failing on the first one missing
    pub fn open(gilrs: Gilrs, count: usize) -> Result<Self, StartupError> {
        let connected: Vec<Controller> = gilrs
            .gamepads()
            .filter(|(_id, pad)| pad.is_connected())
            .map(|(id, pad)| Controller {
                id,
                name: pad.name().to_string(),
            })
            .collect();

        let pads = select_pads(connected, count)?;
        for (index, pad) in pads.iter().enumerate() {
            log::info!("Controller {} connected: {}", index + 1, pad.name);
        }

        Ok(Self { pads, gilrs })
    }

    /// Drain pending controller events so cached axis state is current
    pub fn poll(&mut self) {
        while self.gilrs.next_event().is_some() {}
    }

    /// Left stick vertical reading of the controller for `side`
    pub fn axis(&self, side: Side) -> i16 {
        let Some(pad) = self.pads.get(side.index()) else {
            return 0;
        };
        let value = self.gilrs.gamepad(pad.id).value(Axis::LeftStickY);
        let axis = axis_to_i16(value);
        log::trace!("Axis value: {}", axis);
        axis
    }

    /// Fill the controller part of this frame's input
    pub fn fill_input(&mut self, input: &mut FrameInput) {
        self.poll();
        for side in Side::BOTH {
            input.paddle_mut(side).axis = self.axis(side);
        }
    }
}

/// Keep the first `count` of the connected controllers.
/// Missing controllers are reported 1-based, the first absent one first.
pub fn select_pads<T>(mut connected: Vec<T>, count: usize) -> Result<Vec<T>, StartupError> {
    let found = connected.len();
    if found < count {
        return Err(StartupError::ControllerMissing {
            index: found + 1,
            found,
        });
    }
    connected.truncate(count);
    Ok(connected)
}
