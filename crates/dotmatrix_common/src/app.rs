use crate::key::Key;

/// The contract between an emulator core and a presentation front-end.
///
/// `update` is called once per presented frame and must fill `screen` with
/// `width * height` pixels in the front-end's pixel format (RGB24).
pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
