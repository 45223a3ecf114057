// Input collaborator
//
// Raw keyboard events are folded into a set of held directions, and the
// simulation only ever sees an immutable `InputSnapshot` per tick.
//
// - `direction`: directions and the per-tick snapshot
// - `held`: ordered held-direction tracking with conflict rules
// - `bindings`: key-to-control configuration
// - `keyboard`: winit event handling tying the above together

pub mod bindings;
pub mod direction;
pub mod held;
pub mod keyboard;

pub use direction::{Direction, InputSnapshot};
pub use keyboard::KeyboardInput;
