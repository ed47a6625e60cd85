//! A row of equal-width buttons with a sliding selection highlight.
//!
//! Every layout-affecting setter rebuilds the segments and the selector from
//! scratch. A tap restyles the labels, starts the selector sliding toward the
//! tapped segment and emits [`Message::ValueChanged`]. The parent then reads
//! [`SegmentedControl::selected_segment_index`].

use crate::error::ControlError;
use crate::key::SegmentedKeyMap;
use crate::selector::{Selector, SelectorAnimation, FRAME_INTERVAL};
use crate::style::{sanitize_length, SegmentedStyle, SelectorShape};
use crate::titles::Titles;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType};
use ratatui::Frame;
use segctl_core::{subscribe, Command, Component, Every, Subscription};
use tracing::{debug, warn};
use unicode_width::UnicodeWidthStr;

/// Messages for the segmented control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Select the segment at this index, as if it had been clicked.
    Tap(usize),
    /// A mouse event; left-button presses inside the bounds become taps.
    Mouse(MouseEvent),
    /// A key press, handled only while focused.
    KeyPress(KeyEvent),
    /// Advance the selector animation by one frame.
    Tick,
    /// Emitted after every accepted tap. Read the new index from
    /// [`SegmentedControl::selected_segment_index`].
    ValueChanged,
}

/// One selectable button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    index: usize,
    label: String,
    color: Color,
}

impl Segment {
    /// Position from the left, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The label text, exactly as it appeared in the title string.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current label color.
    pub fn color(&self) -> Color {
        self.color
    }
}

/// A segmented button bar with a rectangle or underline selector.
///
/// `bounds` is the rectangle the control occupies on screen. It drives all
/// layout math and mouse hit-testing, so the parent should pass the same
/// rectangle to [`view`](Component::view).
pub struct SegmentedControl {
    id: &'static str,
    titles: Titles,
    style: SegmentedStyle,
    bounds: Rect,
    key_map: SegmentedKeyMap,
    segments: Vec<Segment>,
    selector: Selector,
    animation: Option<SelectorAnimation>,
    selected: usize,
    focus: bool,
    generation: u64,
}

impl SegmentedControl {
    /// Create a control with the given subscription identifier and titles.
    ///
    /// The identifier keys the animation timer, so it must be unique among
    /// the controls on screen.
    pub fn new(id: &'static str, titles: Titles) -> Self {
        let style = SegmentedStyle::default();
        let selector = Selector::new(
            style.selector_shape,
            0.0,
            0.0,
            titles.len(),
            style.selector_color,
            0.0,
        );
        let mut control = Self {
            id,
            titles,
            style,
            bounds: Rect::default(),
            key_map: SegmentedKeyMap::default(),
            segments: Vec::new(),
            selector,
            animation: None,
            selected: 0,
            focus: false,
            generation: 0,
        };
        control.rebuild();
        control
    }

    /// Replace the whole visual style.
    pub fn with_style(mut self, style: SegmentedStyle) -> Self {
        self.style = SegmentedStyle {
            border_width: sanitize_length(style.border_width),
            corner_radius: sanitize_length(style.corner_radius),
            ..style
        };
        self.rebuild();
        self
    }

    /// Set the on-screen rectangle.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.set_bounds(bounds);
        self
    }

    /// Replace the keyboard bindings.
    pub fn with_key_map(mut self, key_map: SegmentedKeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    // --- Configuration ---

    /// Set the border width. Applied directly, without a rebuild.
    pub fn set_border_width(&mut self, width: f64) {
        self.style.border_width = sanitize_length(width);
    }

    /// Set the border color. Applied directly, without a rebuild.
    pub fn set_border_color(&mut self, color: Color) {
        self.style.border_color = color;
    }

    /// Set the explicit corner radius.
    pub fn set_corner_radius(&mut self, radius: f64) {
        self.style.corner_radius = sanitize_length(radius);
        self.rebuild();
    }

    /// Force fully rounded ends. Turning it off restores the explicit
    /// corner radius.
    pub fn set_rounded_fully(&mut self, rounded: bool) {
        self.style.rounded_fully = rounded;
        self.rebuild();
    }

    /// Set the label color of unselected segments.
    pub fn set_text_color(&mut self, color: Color) {
        self.style.text_color = color;
        self.rebuild();
    }

    /// Parse and apply a comma-separated title string. On error the current
    /// titles are kept.
    pub fn set_button_titles(&mut self, titles: &str) -> Result<(), ControlError> {
        let titles = Titles::parse(titles).inspect_err(|err| {
            warn!(id = self.id, error = %err, "rejected button titles");
        })?;
        self.set_titles(titles);
        Ok(())
    }

    /// Apply already parsed titles.
    pub fn set_titles(&mut self, titles: Titles) {
        self.titles = titles;
        self.rebuild();
    }

    /// Set the selector shape.
    pub fn set_selector_shape(&mut self, shape: SelectorShape) {
        self.style.selector_shape = shape;
        self.rebuild();
    }

    /// Set the selector shape from its numeric code; unknown codes select
    /// [`SelectorShape::Rectangle`].
    pub fn set_selector_shape_ordinal(&mut self, ordinal: i64) {
        self.set_selector_shape(SelectorShape::from_ordinal(ordinal));
    }

    /// Set the selector fill color.
    pub fn set_selector_color(&mut self, color: Color) {
        self.style.selector_color = color;
        self.rebuild();
    }

    /// Set the label color of the selected segment.
    pub fn set_selector_text_color(&mut self, color: Color) {
        self.style.selector_text_color = color;
        self.rebuild();
    }

    /// Move or resize the control.
    ///
    /// This is a relayout, not a rebuild: the selection is kept and the
    /// selector jumps straight to the selected segment.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.relayout();
        debug!(
            id = self.id,
            width = bounds.width,
            height = bounds.height,
            selected = self.selected,
            "relaid out segmented control"
        );
    }

    /// Give this control keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus from this control.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    // --- State ---

    /// Index of the selected segment.
    pub fn selected_segment_index(&self) -> usize {
        self.selected
    }

    /// The segments, left to right.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The selection highlight.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Whether the selector is currently sliding.
    pub fn animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Where the selector is heading: the slide target while animating,
    /// otherwise its resting x.
    pub fn target_x(&self) -> f64 {
        self.animation
            .map_or(self.selector.frame().x, |anim| anim.target())
    }

    /// The parsed titles.
    pub fn titles(&self) -> &Titles {
        &self.titles
    }

    /// The current style.
    pub fn style(&self) -> &SegmentedStyle {
        &self.style
    }

    /// The on-screen rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Numeric code of the selector shape.
    pub fn selector_shape_ordinal(&self) -> i64 {
        self.style.selector_shape.ordinal()
    }

    /// Corner radius in effect: half the height when fully rounded,
    /// otherwise the explicit radius.
    pub fn corner_radius(&self) -> f64 {
        if self.style.rounded_fully {
            f64::from(self.bounds.height) / 2.0
        } else {
            self.style.corner_radius
        }
    }

    /// Width of one segment, and of the selector.
    pub fn segment_width(&self) -> f64 {
        f64::from(self.bounds.width) / self.segments.len() as f64
    }

    /// Number of rebuilds performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Segment under the absolute screen cell (`column`, `row`), if any.
    pub fn segment_at(&self, column: u16, row: u16) -> Option<usize> {
        let b = self.bounds;
        if column < b.x || column >= b.right() || row < b.y || row >= b.bottom() {
            return None;
        }
        let count = self.segments.len();
        let index = usize::from(column - b.x) * count / usize::from(b.width);
        Some(index.min(count - 1))
    }

    // --- Behavior ---

    /// Tear down and recreate the segments and the selector.
    ///
    /// Selection returns to segment 0 and any running slide is dropped, so
    /// the highlight and [`selected_segment_index`](Self::selected_segment_index)
    /// always agree.
    pub fn rebuild(&mut self) {
        let corner_radius = self.corner_radius();

        self.segments = self
            .titles
            .labels()
            .iter()
            .enumerate()
            .map(|(index, label)| Segment {
                index,
                label: label.clone(),
                color: self.style.text_color,
            })
            .collect();

        self.selected = 0;
        self.relayout();

        self.generation += 1;
        debug!(
            id = self.id,
            generation = self.generation,
            segments = self.segments.len(),
            shape = ?self.style.selector_shape,
            corner_radius,
            "rebuilt segmented control"
        );
    }

    /// Recompute the selector for the current bounds, resting on the
    /// selected segment, and color the labels to match.
    fn relayout(&mut self) {
        self.selector = Selector::new(
            self.style.selector_shape,
            f64::from(self.bounds.width),
            f64::from(self.bounds.height),
            self.segments.len(),
            self.style.selector_color,
            self.corner_radius(),
        );
        self.selector
            .set_x(self.segment_width() * self.selected as f64);
        self.animation = None;
        self.restyle(self.selected);
    }

    fn restyle(&mut self, selected: usize) {
        for segment in &mut self.segments {
            segment.color = if segment.index == selected {
                self.style.selector_text_color
            } else {
                self.style.text_color
            };
        }
    }

    /// Select segment `index`: restyle labels, slide the selector and emit
    /// [`Message::ValueChanged`].
    ///
    /// A tap during a running slide replaces it, starting from wherever the
    /// selector currently is.
    pub fn handle_tap(&mut self, index: usize) -> Result<Command<Message>, ControlError> {
        let count = self.segments.len();
        if index >= count {
            return Err(ControlError::SegmentOutOfRange { index, count });
        }

        self.restyle(index);

        let target = self.segment_width() * index as f64;
        let from = self.selector.frame().x;
        self.animation = if from == target {
            None
        } else {
            Some(SelectorAnimation::new(from, target))
        };
        self.selected = index;

        debug!(id = self.id, index, from, target, "segment tapped");
        Ok(Command::message(Message::ValueChanged))
    }

    fn tap(&mut self, index: usize) -> Command<Message> {
        self.handle_tap(index).unwrap_or_else(|err| {
            warn!(id = self.id, error = %err, "ignoring tap");
            Command::none()
        })
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        let count = self.segments.len();
        if self.key_map.prev.matches(&key) {
            return self.tap((self.selected + count - 1) % count);
        }
        if self.key_map.next.matches(&key) {
            return self.tap((self.selected + 1) % count);
        }
        match key.code {
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(digit) if digit > 0 && (digit as usize) <= count => {
                    self.tap(digit as usize - 1)
                }
                _ => Command::none(),
            },
            _ => Command::none(),
        }
    }

    fn step_animation(&mut self) {
        if let Some(anim) = self.animation.as_mut() {
            let done = anim.advance(FRAME_INTERVAL);
            self.selector.set_x(anim.position());
            if done {
                self.animation = None;
            }
        }
    }
}

/// Left edge of column `index` when `width` cells are split into `count`
/// equal columns. Column `k` holds exactly the cells `c` with
/// `c * count / width == k`, which keeps drawing and hit-testing in step.
fn column_start(width: u16, count: usize, index: usize) -> u16 {
    let start = (usize::from(width) * index).div_ceil(count);
    u16::try_from(start).unwrap_or(u16::MAX)
}

impl Component for SegmentedControl {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Tap(index) => self.tap(index),
            Message::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    match self.segment_at(mouse.column, mouse.row) {
                        Some(index) => self.tap(index),
                        None => Command::none(),
                    }
                }
                _ => Command::none(),
            },
            Message::KeyPress(key) if self.focus => self.handle_key(key),
            Message::Tick => {
                self.step_animation();
                Command::none()
            }
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        // Everything is laid out in `bounds`, the same rectangle mouse
        // hit-testing uses, and clipped to `area`.
        let bounds = self.bounds;
        let clip = bounds.intersection(area).intersection(frame.area());
        if clip.is_empty() {
            return;
        }
        let buf = frame.buffer_mut();

        let selector_cells = self.selector.frame().to_cells(bounds).intersection(clip);
        buf.set_style(selector_cells, Style::default().bg(self.selector.color()));

        let count = self.segments.len();
        let row = bounds.y + bounds.height.saturating_sub(1) / 2;
        if row >= clip.y && row < clip.bottom() {
            for segment in &self.segments {
                let start = column_start(bounds.width, count, segment.index);
                let end = column_start(bounds.width, count, segment.index + 1);
                let width = end.saturating_sub(start);
                let label_width = u16::try_from(segment.label.width()).unwrap_or(u16::MAX);
                let x = bounds.x + start + width.saturating_sub(label_width) / 2;
                let column = Rect::new(bounds.x + start, row, width, 1).intersection(clip);
                if column.is_empty() || x < column.x {
                    continue;
                }
                buf.set_stringn(
                    x,
                    row,
                    &segment.label,
                    usize::from(column.right() - x),
                    Style::default().fg(segment.color),
                );
            }
        }

        if self.style.border_width > 0.0 {
            let border_type = if self.style.border_width >= 2.0 {
                BorderType::Thick
            } else if self.corner_radius() > 0.0 {
                BorderType::Rounded
            } else {
                BorderType::Plain
            };
            let block = Block::bordered()
                .border_type(border_type)
                .border_style(Style::default().fg(self.style.border_color));
            frame.render_widget(block, clip);
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.animation.is_some() {
            vec![subscribe(Every::new(FRAME_INTERVAL, self.id)).map(|_| Message::Tick)]
        } else {
            vec![]
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use segctl_core::testing::ComponentHarness;

    fn control(titles: &str, width: u16, height: u16) -> SegmentedControl {
        SegmentedControl::new("test", Titles::parse(titles).unwrap())
            .with_style(SegmentedStyle {
                text_color: Color::Gray,
                selector_text_color: Color::White,
                selector_color: Color::Blue,
                ..SegmentedStyle::default()
            })
            .with_bounds(Rect::new(0, 0, width, height))
    }

    fn labels(c: &SegmentedControl) -> Vec<&str> {
        c.segments().iter().map(Segment::label).collect()
    }

    fn highlighted(c: &SegmentedControl) -> Vec<usize> {
        c.segments()
            .iter()
            .filter(|s| s.color() == Color::White)
            .map(Segment::index)
            .collect()
    }

    fn settle(h: &mut ComponentHarness<SegmentedControl>) {
        while h.component().animating() {
            h.send(Message::Tick);
        }
    }

    fn click(column: u16, row: u16) -> Message {
        Message::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    // --- Rebuild ---

    #[test]
    fn segments_follow_title_order() {
        let c = control("Red,Green,Blue", 300, 40);
        assert_eq!(labels(&c), ["Red", "Green", "Blue"]);
        assert_eq!(c.segments().len(), 3);
    }

    #[test]
    fn titles_are_not_trimmed() {
        let c = control("Red, Green", 300, 40);
        assert_eq!(labels(&c), ["Red", " Green"]);
    }

    #[test]
    fn selector_width_matches_segment_width_for_both_shapes() {
        let mut c = control("a,b,c,d", 300, 40);
        assert_eq!(c.selector().frame().width, 75.0);
        assert_eq!(c.selector().frame().height, 40.0);

        c.set_selector_shape(SelectorShape::Line);
        assert_eq!(c.selector().shape(), SelectorShape::Line);
        assert_eq!(c.selector().frame().width, 75.0);
    }

    #[test]
    fn first_segment_highlighted_after_rebuild() {
        let c = control("a,b,c", 30, 3);
        assert_eq!(highlighted(&c), [0]);
        assert_eq!(c.selected_segment_index(), 0);
    }

    #[test]
    fn rebuild_resets_selection_and_animation() {
        let mut c = control("a,b,c", 300, 3);
        c.handle_tap(2).unwrap();
        assert!(c.animating());

        c.set_text_color(Color::Yellow);
        assert_eq!(c.selected_segment_index(), 0);
        assert!(!c.animating());
        assert_eq!(c.selector().frame().x, 0.0);
        assert_eq!(highlighted(&c), [0]);
    }

    #[test]
    fn resize_keeps_selection() {
        let mut c = control("a,b,c", 30, 3);
        c.handle_tap(2).unwrap();
        let generation = c.generation();

        c.set_bounds(Rect::new(0, 0, 60, 3));
        assert_eq!(c.selected_segment_index(), 2);
        assert_eq!(highlighted(&c), [2]);
        assert_eq!(c.selector().frame().x, 40.0);
        assert_eq!(c.selector().frame().width, 20.0);
        assert!(!c.animating());
        assert_eq!(c.generation(), generation);
    }

    #[test]
    fn resize_follows_height_when_rounded() {
        let mut c = control("a,b", 20, 4);
        c.set_rounded_fully(true);
        c.set_bounds(Rect::new(0, 0, 20, 6));
        assert_eq!(c.corner_radius(), 3.0);
        assert_eq!(c.selector().corner_radius(), 3.0);
    }

    #[test]
    fn border_setters_skip_rebuild() {
        let mut c = control("a,b", 30, 3);
        let generation = c.generation();
        c.set_border_width(1.0);
        c.set_border_color(Color::Red);
        assert_eq!(c.generation(), generation);
        assert_eq!(c.style().border_color, Color::Red);

        c.set_selector_color(Color::Green);
        assert_eq!(c.generation(), generation + 1);
        assert_eq!(c.selector().color(), Color::Green);
    }

    #[test]
    fn invalid_shape_ordinal_falls_back_to_rectangle() {
        let mut c = control("a,b", 30, 3);
        c.set_selector_shape_ordinal(1);
        assert_eq!(c.selector_shape_ordinal(), 1);
        c.set_selector_shape_ordinal(42);
        assert_eq!(c.selector().shape(), SelectorShape::Rectangle);
    }

    #[test]
    fn empty_titles_are_rejected_and_previous_kept() {
        let mut c = control("a,b", 30, 3);
        assert_eq!(c.set_button_titles(""), Err(ControlError::EmptyTitles));
        assert_eq!(labels(&c), ["a", "b"]);

        c.set_button_titles("x,y,z").unwrap();
        assert_eq!(labels(&c), ["x", "y", "z"]);
        assert_eq!(c.titles().as_str(), "x,y,z");
    }

    #[test]
    fn rounded_fully_uses_half_height_then_restores_explicit_radius() {
        let mut c = control("a,b", 100, 40);
        c.set_corner_radius(4.0);
        c.set_rounded_fully(true);
        assert_eq!(c.corner_radius(), 20.0);
        assert_eq!(c.selector().corner_radius(), 20.0);

        c.set_rounded_fully(false);
        assert_eq!(c.corner_radius(), 4.0);
    }

    #[test]
    fn negative_lengths_are_clamped() {
        let mut c = control("a,b", 100, 40);
        c.set_corner_radius(-3.0);
        c.set_border_width(-1.0);
        assert_eq!(c.corner_radius(), 0.0);
        assert_eq!(c.style().border_width, 0.0);
    }

    // --- Taps ---

    #[test]
    fn tap_selects_and_restyles() {
        let mut h = ComponentHarness::new(control("a,b,c", 300, 40));
        for k in [2, 0, 1] {
            h.send(Message::Tap(k));
            assert_eq!(h.component().selected_segment_index(), k);
            assert_eq!(highlighted(h.component()), [k]);
            assert!(h
                .component()
                .segments()
                .iter()
                .filter(|s| s.index() != k)
                .all(|s| s.color() == Color::Gray));
        }
    }

    #[test]
    fn tap_emits_value_changed_once() {
        let mut h = ComponentHarness::new(control("a,b,c", 300, 40));
        h.send(Message::Tap(1));
        assert_eq!(h.take_emitted(), [Message::ValueChanged]);

        // Re-tapping the selected segment still notifies.
        h.send(Message::Tap(1));
        assert_eq!(h.take_emitted(), [Message::ValueChanged]);
    }

    #[test]
    fn tap_first_segment_targets_origin() {
        let mut c = control("a,b,c", 300, 40);
        c.handle_tap(0).unwrap();
        assert_eq!(c.target_x(), 0.0);
        assert!(!c.animating());
    }

    #[test]
    fn tap_targets_multiples_of_segment_width() {
        let mut c = control("a,b,c", 300, 40);
        c.handle_tap(1).unwrap();
        assert_eq!(c.target_x(), 100.0);
        c.handle_tap(2).unwrap();
        assert_eq!(c.target_x(), 200.0);
    }

    #[test]
    fn out_of_range_tap_is_an_error() {
        let mut c = control("a,b,c", 300, 40);
        assert!(matches!(
            c.handle_tap(3),
            Err(ControlError::SegmentOutOfRange { index: 3, count: 3 })
        ));

        let mut h = ComponentHarness::new(c);
        h.send(Message::Tap(9));
        assert!(h.take_emitted().is_empty());
        assert_eq!(h.component().selected_segment_index(), 0);
    }

    // --- Animation ---

    #[test]
    fn ticks_slide_selector_to_target() {
        let mut h = ComponentHarness::new(control("a,b,c", 300, 40));
        h.send(Message::Tap(2));
        assert_eq!(h.component().subscriptions().len(), 1);

        h.send(Message::Tick);
        let x = h.component().selector().frame().x;
        assert!(x > 0.0 && x < 200.0);

        settle(&mut h);
        assert_eq!(h.component().selector().frame().x, 200.0);
        assert!(h.component().subscriptions().is_empty());
    }

    #[test]
    fn new_tap_replaces_running_slide() {
        let mut h = ComponentHarness::new(control("a,b,c", 300, 40));
        h.send(Message::Tap(2));
        for _ in 0..5 {
            h.send(Message::Tick);
        }
        let in_flight = h.component().selector().frame().x;
        assert!(in_flight > 0.0);

        h.send(Message::Tap(1));
        assert_eq!(h.component().target_x(), 100.0);
        assert_eq!(h.component().selector().frame().x, in_flight);
        assert_eq!(h.component().subscriptions().len(), 1);

        settle(&mut h);
        assert_eq!(h.component().selector().frame().x, 100.0);
    }

    #[test]
    fn tick_without_animation_is_noop() {
        let mut h = ComponentHarness::new(control("a,b,c", 300, 40));
        h.send(Message::Tick);
        assert_eq!(h.component().selector().frame().x, 0.0);
        assert!(h.take_emitted().is_empty());
    }

    // --- Input routing ---

    #[test]
    fn mouse_click_taps_segment_under_cursor() {
        let mut h = ComponentHarness::new(
            control("a,b,c", 30, 3).with_bounds(Rect::new(10, 2, 30, 3)),
        );
        h.send(click(35, 3));
        assert_eq!(h.component().selected_segment_index(), 2);
        assert_eq!(h.take_emitted(), [Message::ValueChanged]);

        h.send(click(5, 3));
        assert_eq!(h.component().selected_segment_index(), 2);
        assert!(h.take_emitted().is_empty());
    }

    #[test]
    fn segment_at_splits_columns_evenly() {
        let c = control("a,b,c", 10, 1);
        let hits: Vec<_> = (0..10).filter_map(|x| c.segment_at(x, 0)).collect();
        assert_eq!(hits, [0, 0, 0, 0, 1, 1, 1, 2, 2, 2]);
        assert_eq!(c.segment_at(10, 0), None);
    }

    #[test]
    fn keys_move_selection_only_when_focused() {
        let mut h = ComponentHarness::new(control("a,b,c", 30, 3));
        h.send(Message::KeyPress(KeyEvent::from(KeyCode::Right)));
        assert_eq!(h.component().selected_segment_index(), 0);

        h.component_mut().focus();
        assert!(h.component().focused());
        h.send(Message::KeyPress(KeyEvent::from(KeyCode::Right)));
        assert_eq!(h.component().selected_segment_index(), 1);
        h.send(Message::KeyPress(KeyEvent::from(KeyCode::Char('3'))));
        assert_eq!(h.component().selected_segment_index(), 2);
        h.send(Message::KeyPress(KeyEvent::from(KeyCode::Right)));
        assert_eq!(h.component().selected_segment_index(), 0);
        h.send(Message::KeyPress(KeyEvent::from(KeyCode::Left)));
        assert_eq!(h.component().selected_segment_index(), 2);
        h.send(Message::KeyPress(KeyEvent::from(KeyCode::Char('9'))));
        assert_eq!(h.component().selected_segment_index(), 2);
        assert_eq!(h.take_emitted().len(), 4);
    }

    // --- Rendering ---

    #[test]
    fn renders_centered_labels() {
        let h = ComponentHarness::new(control("Red,Green,Blue", 30, 3));
        let rows: Vec<String> = h.render_string(30, 3).lines().map(String::from).collect();
        assert_eq!(rows[1], "   Red      Green      Blue   ");
    }

    #[test]
    fn rectangle_selector_fills_selected_column() {
        let mut h = ComponentHarness::new(control("a,b,c", 30, 3));
        h.send(Message::Tap(2));
        settle(&mut h);

        let buf = h.render(30, 3);
        for y in 0..3 {
            assert_eq!(buf[(25, y)].bg, Color::Blue);
            assert_ne!(buf[(5, y)].bg, Color::Blue);
        }
        assert_eq!(buf[(24, 1)].fg, Color::White);
        assert_eq!(buf[(4, 1)].fg, Color::Gray);
    }

    #[test]
    fn line_selector_fills_bottom_row_only() {
        let mut c = control("a,b", 20, 3);
        c.set_selector_shape(SelectorShape::Line);
        let buf = ComponentHarness::new(c).render(20, 3);
        assert_eq!(buf[(3, 2)].bg, Color::Blue);
        assert_ne!(buf[(3, 1)].bg, Color::Blue);
        assert_ne!(buf[(13, 2)].bg, Color::Blue);
    }

    #[test]
    fn border_follows_corner_radius() {
        let mut c = control("a,b", 20, 3);
        c.set_border_width(1.0);
        let plain = ComponentHarness::new(c).render_string(20, 3);
        assert!(plain.starts_with('┌'));

        let mut c = control("a,b", 20, 3);
        c.set_border_width(1.0);
        c.set_rounded_fully(true);
        let rounded = ComponentHarness::new(c).render_string(20, 3);
        assert!(rounded.starts_with('╭'));
    }

    #[test]
    fn drawing_uses_bounds_like_hit_testing() {
        let mut h = ComponentHarness::new(
            control("a,b", 20, 1).with_bounds(Rect::new(10, 0, 20, 1)),
        );
        h.send(click(25, 0));
        settle(&mut h);
        assert_eq!(h.component().selected_segment_index(), 1);

        let buf = h.render(30, 1);
        // Segment 1 covers columns 20..30 on screen, label "b" at 24.
        assert_eq!(buf[(24, 0)].symbol(), "b");
        assert_eq!(buf[(24, 0)].fg, Color::White);
        assert_eq!(buf[(25, 0)].bg, Color::Blue);
        assert_eq!(buf[(14, 0)].symbol(), "a");
        assert_ne!(buf[(5, 0)].bg, Color::Blue);
    }

    #[test]
    fn area_smaller_than_bounds_clips_drawing() {
        let c = control("a,b", 20, 1);
        let buf = ComponentHarness::new(c).render_in(20, 1, Rect::new(0, 0, 10, 1));
        assert_eq!(buf[(4, 0)].symbol(), "a");
        assert_eq!(buf[(14, 0)].symbol(), " ");
        assert_ne!(buf[(15, 0)].bg, Color::Blue);
    }

    #[test]
    fn view_is_clipped_to_area() {
        let c = control("Red,Green", 20, 1).with_bounds(Rect::new(0, 1, 20, 1));
        let buf = ComponentHarness::new(c).render_in(20, 3, Rect::new(0, 1, 20, 1));
        for x in 0..20 {
            assert_eq!(buf[(x, 0)].symbol(), " ");
            assert_eq!(buf[(x, 2)].symbol(), " ");
        }
    }
}
