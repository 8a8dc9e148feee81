use super::*;
use crate::{
    foundation::core::ModelType,
    geometry::facts::HELMET_FACES,
    skin::model::infer_model_type,
    surface::{rgba::RgbaSurface, settings::SurfaceSettings},
};

#[derive(Debug, Default, PartialEq, Eq)]
struct Calls {
    resizes: Vec<(u32, u32)>,
    clears: Vec<PixelRect>,
    draws: Vec<(PixelRect, PixelRect)>,
    puts: usize,
}

/// Delegates to an [`RgbaSurface`] and records every mutating call.
#[derive(Default)]
struct Recording {
    inner: RgbaSurface,
    calls: Calls,
}

impl TextureSource for Recording {
    fn width(&self) -> u32 {
        self.inner.width()
    }

    fn height(&self) -> u32 {
        self.inner.height()
    }

    fn to_rgba8(&self) -> std::borrow::Cow<'_, image::RgbaImage> {
        self.inner.to_rgba8()
    }
}

impl Surface for Recording {
    fn resize(&mut self, width: u32, height: u32) -> SkinResult<()> {
        self.calls.resizes.push((width, height));
        self.inner.resize(width, height)
    }

    fn clear(&mut self, rect: PixelRect) {
        self.calls.clears.push(rect);
        self.inner.clear(rect);
    }

    fn draw_image<T: TextureSource + ?Sized>(
        &mut self,
        source: &T,
        src: PixelRect,
        dst: PixelRect,
    ) -> SkinResult<()> {
        self.calls.draws.push((src, dst));
        self.inner.draw_image(source, src, dst)
    }

    fn get_region(&self, rect: PixelRect) -> SkinResult<Vec<u8>> {
        self.inner.get_region(rect)
    }

    fn put_region(
        &mut self,
        data: &[u8],
        width: u32,
        height: u32,
        x: u32,
        y: u32,
    ) -> SkinResult<()> {
        self.calls.puts += 1;
        self.inner.put_region(data, width, height, x, y)
    }
}

fn solid(w: u32, h: u32, px: [u8; 4]) -> image::RgbaImage {
    image::RgbaImage::from_pixel(w, h, image::Rgba(px))
}

#[test]
fn square_skin_is_drawn_once_without_copies() {
    for side in [64, 128] {
        let mut s = Recording::default();
        let layout = load_skin(&mut s, &solid(side, side, [50, 60, 70, 255])).unwrap();
        assert_eq!(layout, SkinLayout::Modern);
        assert_eq!(s.calls.resizes, vec![(side, side)]);
        assert_eq!(s.calls.clears, vec![PixelRect::sized(side, side)]);
        assert_eq!(
            s.calls.draws,
            vec![(PixelRect::sized(side, side), PixelRect::sized(side, side))]
        );
        assert_eq!(s.calls.puts, 0);
        assert_eq!(s.inner.pixel(side - 1, side - 1), Some([50, 60, 70, 255]));
    }
}

#[test]
fn legacy_skin_is_drawn_into_top_half_then_upgraded() {
    let mut s = Recording::default();
    let src = solid(64, 32, [50, 60, 70, 255]);
    let layout = load_skin(&mut s, &src).unwrap();

    assert_eq!(layout, SkinLayout::Legacy);
    assert_eq!(s.calls.resizes, vec![(64, 64)]);
    assert_eq!(
        s.calls.draws,
        vec![(PixelRect::sized(64, 32), PixelRect::sized(64, 32))]
    );
    assert_eq!(s.calls.puts, 12);
    // Full clear plus the six helmet faces of this opaque skin.
    assert_eq!(s.calls.clears.len(), 1 + HELMET_FACES.len());
    assert_eq!((s.width(), s.height()), (64, 64));
}

#[test]
fn legacy_skin_with_transparency_skips_helmet_clear() {
    let mut s = Recording::default();
    let mut src = solid(64, 32, [50, 60, 70, 255]);
    src.put_pixel(60, 12, image::Rgba([0, 0, 0, 0]));
    load_skin(&mut s, &src).unwrap();

    assert_eq!(s.calls.clears, vec![PixelRect::sized(64, 64)]);
    assert_eq!(s.calls.puts, 12);
    assert_eq!(s.inner.pixel(40, 8), Some([50, 60, 70, 255]));
}

#[test]
fn bad_skin_shape_fails_without_touching_surface() {
    for (w, h) in [(64, 48), (63, 32), (32, 64), (1, 0)] {
        let mut s = Recording::default();
        let err = load_skin(&mut s, &solid(w, h, [0, 0, 0, 255])).unwrap_err();
        match err {
            SkinError::InvalidDimensions { width, height } => assert_eq!((width, height), (w, h)),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(s.calls, Calls::default());
    }
}

#[test]
fn upgraded_legacy_skin_reads_as_default_model() {
    let mut s = RgbaSurface::new(SurfaceSettings::default());
    load_skin(&mut s, &solid(64, 32, [90, 90, 90, 255])).unwrap();
    // The mirrored arm faces fill the left-arm probes with opaque content.
    assert_eq!(infer_model_type(&s).unwrap(), ModelType::Default);
}

#[test]
fn cape_surface_follows_grid_scale() {
    let cases = [
        ((64, 32), CapeGrid::Grid64x32, (64, 32)),
        ((128, 64), CapeGrid::Grid64x32, (128, 64)),
        ((22, 17), CapeGrid::Grid22x17, (64, 32)),
        ((46, 22), CapeGrid::Grid46x22, (64, 32)),
        ((40, 40), CapeGrid::Fallback, (120, 60)),
    ];
    for ((w, h), grid, (sw, sh)) in cases {
        let mut s = Recording::default();
        let res = load_cape(&mut s, &solid(w, h, [1, 2, 3, 255])).unwrap();
        assert_eq!(res.grid, grid, "{w}x{h}");
        assert_eq!((res.width, res.height), (sw, sh), "{w}x{h}");
        assert_eq!(s.calls.resizes, vec![(sw, sh)]);
        assert_eq!(
            s.calls.draws,
            vec![(PixelRect::sized(w, h), PixelRect::sized(w, h))]
        );
    }
}

#[test]
fn cape_is_drawn_at_native_size_in_top_left() {
    let mut s = RgbaSurface::default();
    load_cape(&mut s, &solid(22, 17, [1, 2, 3, 255])).unwrap();
    assert_eq!(s.pixel(21, 16), Some([1, 2, 3, 255]));
    assert_eq!(s.pixel(22, 16), Some([0, 0, 0, 0]));
    assert_eq!(s.pixel(21, 17), Some([0, 0, 0, 0]));
}
