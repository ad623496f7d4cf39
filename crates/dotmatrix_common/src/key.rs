/// Host keyboard keys understood by the emulator front-ends.
///
/// Front-ends translate their native key codes into this enum; anything
/// without a mapping becomes `Key::None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    A,
    S,
    Z,
    X,
    Up,
    Down,
    Left,
    Right,
    Backspace,
    Escape,
    None,
}
