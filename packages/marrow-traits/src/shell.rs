pub trait ShellProvider {
    fn request_redraw(&self) {}
}

pub struct DummyShellProvider;
impl ShellProvider for DummyShellProvider {}
