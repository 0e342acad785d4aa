//! The canvas view - routes gesture events to interpreters and dispatches
//! the resulting commands to the document model.
//!
//! Every handler runs on the caller's thread with exclusive access to the
//! view. Reads go through `EmojiArtModel::snapshot`, writes through
//! `EmojiArtModel::apply`; the view never keeps its own copy of emoji
//! positions.

use super::hit_test::{HitTarget, HitTester};
use super::state::ViewState;
use crate::document::{DocumentCommand, EmojiArtModel};
use crate::geometry::{Offset, Point, Size};
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::{
    ItemDragGesture, LongPressGesture, PanGesture, ZoomGesture, resolve_drop, tap_background,
    tap_emoji, zoom_to_fit,
};
use crate::selection::SelectionSet;
use crate::settings::Settings;
use crate::types::DropPayload;
use std::time::Duration;
use tracing::debug;

pub struct CanvasView {
    pub(super) state: ViewState,
    pub(super) zoom: ZoomGesture,
    pub(super) pan: PanGesture,
    pub(super) drag: ItemDragGesture,
    pub(super) long_press: LongPressGesture,
    pub(super) hit_tester: HitTester,
    default_emoji_size: f32,
}

impl CanvasView {
    pub fn new(viewport: Size) -> Self {
        Self::with_settings(viewport, &Settings::default())
    }

    pub fn with_settings(viewport: Size, settings: &Settings) -> Self {
        Self {
            state: ViewState::new(viewport),
            zoom: ZoomGesture::new(),
            pan: PanGesture::new(),
            drag: ItemDragGesture::new(),
            long_press: LongPressGesture::new(settings.long_press_duration()),
            hit_tester: HitTester::new(),
            default_emoji_size: settings.default_emoji_size,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.state.selection
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.state.viewport = viewport;
    }

    /// Steady zoom combined with any in-flight canvas pinch.
    pub fn effective_zoom(&self) -> f32 {
        self.state.steady_zoom() * self.zoom.canvas_magnification()
    }

    /// Steady pan combined with any in-flight background drag.
    pub fn effective_pan(&self) -> Offset {
        self.state.steady_pan() + self.pan.preview_offset()
    }

    pub fn coordinate_context(&self) -> CoordinateContext {
        CoordinateContext::new(self.effective_zoom(), self.effective_pan(), self.state.viewport)
    }

    pub fn screen_to_document(&self, at: Point) -> Point {
        CoordinateConverter::screen_to_document(at, &self.coordinate_context())
    }

    pub fn document_to_screen(&self, at: Point) -> Point {
        CoordinateConverter::document_to_screen(at, &self.coordinate_context())
    }

    /// What lies under the screen point `at`.
    ///
    /// Also drops selected ids the document no longer has, which happens when
    /// another holder of a shared document removes an emoji.
    pub fn hit_test(&mut self, model: &impl EmojiArtModel, at: Point) -> HitTarget {
        let snapshot = model.snapshot();
        self.state.selection.retain_existing(|id| snapshot.contains(id));
        let doc_point = self.screen_to_document(at);
        self.hit_tester.hit(&snapshot.emojis, doc_point)
    }

    fn dispatch(
        &mut self,
        model: &mut impl EmojiArtModel,
        commands: impl IntoIterator<Item = DocumentCommand>,
    ) {
        for command in commands {
            if let DocumentCommand::RemoveEmoji { id } = command {
                self.state.selection.deselect(id);
            }
            debug!(command = command.label(), target = ?command.target(), "Dispatching");
            model.apply(command);
        }
    }

    // ------------------------------------------------------------------------
    // Taps
    // ------------------------------------------------------------------------

    /// Single tap: toggle the emoji under the finger, or clear the selection.
    pub fn tap(&mut self, model: &impl EmojiArtModel, at: Point) {
        match self.hit_test(model, at) {
            HitTarget::Emoji(id) => tap_emoji(&mut self.state, id),
            HitTarget::Background => tap_background(&mut self.state),
        }
    }

    /// Double tap: zoom to fit when on the background; ignored on emojis.
    pub fn double_tap(&mut self, model: &impl EmojiArtModel, at: Point) -> bool {
        match self.hit_test(model, at) {
            HitTarget::Emoji(_) => false,
            HitTarget::Background => self.zoom_to_fit(model),
        }
    }

    /// Fit the background into the viewport and reset the pan.
    pub fn zoom_to_fit(&mut self, model: &impl EmojiArtModel) -> bool {
        let snapshot = model.snapshot();
        zoom_to_fit(&mut self.state, snapshot.background.as_ref())
    }

    // ------------------------------------------------------------------------
    // Pinch
    // ------------------------------------------------------------------------

    pub fn pinch_changed(&mut self, magnification: f32) {
        self.zoom.changed(&self.state, magnification);
    }

    pub fn pinch_ended(&mut self, model: &mut impl EmojiArtModel, magnification: f32) {
        let commands = self.zoom.ended(&mut self.state, magnification);
        self.dispatch(model, commands);
    }

    // ------------------------------------------------------------------------
    // Drag (emoji drag or background pan)
    // ------------------------------------------------------------------------

    fn route_drag(&mut self, model: &impl EmojiArtModel, start: Point) {
        if self.drag.is_active() || self.pan.is_active() {
            return;
        }
        // Moving the finger rules out a long press
        self.long_press.released();
        if let HitTarget::Emoji(id) = self.hit_test(model, start) {
            self.drag.begin(id);
        }
    }

    /// Feed a drag sample. `start` is where the finger went down and
    /// `translation` the total movement since then, both in screen pixels.
    pub fn drag_changed(&mut self, model: &impl EmojiArtModel, start: Point, translation: Offset) {
        self.route_drag(model, start);
        let zoom = self.effective_zoom();
        if self.drag.is_active() {
            self.drag.changed(translation, zoom);
        } else {
            self.pan.changed(translation, zoom);
        }
    }

    pub fn drag_ended(&mut self, model: &mut impl EmojiArtModel, start: Point, translation: Offset) {
        self.route_drag(model, start);
        let zoom = self.effective_zoom();
        if self.drag.is_active() {
            let command = self.drag.ended(translation, zoom);
            self.dispatch(model, command);
        } else {
            self.pan.ended(&mut self.state, translation, zoom);
        }
    }

    // ------------------------------------------------------------------------
    // Long press
    // ------------------------------------------------------------------------

    /// Finger went down at `at`. Only presses on emojis are tracked.
    pub fn press_began(&mut self, model: &impl EmojiArtModel, at: Point) {
        match self.hit_test(model, at) {
            HitTarget::Emoji(id) => self.long_press.pressed(id),
            HitTarget::Background => self.long_press.released(),
        }
    }

    /// The current press has lasted `elapsed`.
    pub fn press_held(&mut self, model: &mut impl EmojiArtModel, elapsed: Duration) {
        let command = self.long_press.held(elapsed);
        self.dispatch(model, command);
    }

    pub fn press_ended(&mut self) {
        self.long_press.released();
    }

    // ------------------------------------------------------------------------
    // Drop
    // ------------------------------------------------------------------------

    /// Handle payloads dropped at the screen point `at`. Returns whether any
    /// payload was consumed.
    pub fn drop_payloads(
        &mut self,
        model: &mut impl EmojiArtModel,
        payloads: &[DropPayload],
        at: Point,
    ) -> bool {
        let outcome = resolve_drop(payloads, at, &self.coordinate_context(), self.default_emoji_size);
        let consumed = outcome.consumed();
        self.dispatch(model, outcome.commands);
        consumed
    }

    /// Abandon every in-flight gesture without committing anything.
    pub fn cancel_gestures(&mut self) {
        self.zoom.cancel();
        self.pan.cancel();
        self.drag.cancel();
        self.long_press.released();
    }
}
