use crate::core::Viewport;
use crate::error::TimelineResult;

use super::{
    CanvasLayerKind, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame, TextPrimitive,
};

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            polygons: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.polygons.is_empty()
            && self.texts.is_empty()
    }

    /// Copies this layer into a standalone frame.
    #[must_use]
    pub fn to_frame(&self, viewport: Viewport) -> RenderFrame {
        let mut frame = RenderFrame::new(viewport);
        self.extend_frame(&mut frame);
        frame
    }

    fn extend_frame(&self, frame: &mut RenderFrame) {
        frame.lines.extend(self.lines.iter().copied());
        frame.rects.extend(self.rects.iter().copied());
        frame.polygons.extend(self.polygons.iter().cloned());
        frame.texts.extend(self.texts.iter().cloned());
    }
}

/// Frame split into paint layers in canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::new)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rects.push(rect);
        }
    }

    pub fn push_polygon(&mut self, kind: CanvasLayerKind, polygon: PolygonPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.polygons.push(polygon);
        }
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            layer.extend_frame(&mut frame);
        }
        frame
    }

    #[must_use]
    pub fn flatten_layers(&self, include_layers: &[CanvasLayerKind]) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            if include_layers.contains(&layer.kind) {
                layer.extend_frame(&mut frame);
            }
        }
        frame
    }

    pub fn validate(&self) -> TimelineResult<()> {
        self.flatten().validate()
    }
}
