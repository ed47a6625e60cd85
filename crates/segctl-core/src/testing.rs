use crate::command::Command;
use crate::component::Component;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Component`] without a terminal.
///
/// Messages are fed straight into [`Component::update`]. Whatever the
/// component emits through immediate [`Command::message`]s is recorded in
/// an outbox, which is what a parent would have received. Async commands
/// are ignored, so no tokio runtime is needed.
///
/// # Example
///
/// ```rust,ignore
/// use segctl_core::testing::ComponentHarness;
///
/// let mut h = ComponentHarness::new(control);
/// h.send(Message::Tap(2));
/// assert_eq!(h.component().selected_segment_index(), 2);
/// assert_eq!(h.take_emitted().len(), 1);
///
/// let out = h.render_string(30, 3);
/// assert!(out.contains("Blue"));
/// ```
pub struct ComponentHarness<C: Component> {
    component: C,
    emitted: Vec<C::Message>,
}

impl<C: Component> ComponentHarness<C> {
    /// Wrap a component.
    pub fn new(component: C) -> Self {
        Self {
            component,
            emitted: Vec::new(),
        }
    }

    /// Run a single update cycle and record any immediate messages.
    pub fn send(&mut self, msg: C::Message) {
        let cmd = self.component.update(msg);
        self.record(cmd);
    }

    /// Record the immediate messages of a command produced outside
    /// [`send`](Self::send), e.g. by calling a component method directly.
    pub fn record(&mut self, cmd: Command<C::Message>) {
        self.emitted.extend(cmd.into_messages());
    }

    /// Messages emitted since the last call, oldest first.
    pub fn take_emitted(&mut self) -> Vec<C::Message> {
        std::mem::take(&mut self.emitted)
    }

    /// Shared access for assertions.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Mutable access for arranging state directly.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Render the component into a fresh `width` x `height` buffer, using the
    /// whole buffer as its area.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        self.render_in(width, height, Rect::new(0, 0, width, height))
    }

    /// Render the component into `area` of a `width` x `height` buffer.
    pub fn render_in(&self, width: u16, height: u16, area: Rect) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.component.view(frame, area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render and return the visible symbols, one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }
}

/// Concatenate the symbols of every row, separating rows with newlines.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}
