use super::bounds::Bounds;
use super::component::Component;
use super::property::Property;
use super::sprite::Sprite;
use crate::assets::map::TileIndexGrid;
use crate::assets::sheet::TileSheet;
use crate::input::state::InputState;
use crate::renderer::camera::CameraView;
use crate::renderer::raster::Renderer;
use crate::renderer::traits::{DrawType, Renderable};

/// A map of tiled images.
///
/// The per-tile sprites are generated once at construction from a tile
/// sheet and an index grid; the map itself never updates and has no use
/// for properties. Drawing culls tiles whose bounds corners all fall
/// outside the renderer.
pub struct TileMap {
    id: String,
    tiles: Vec<Sprite>,
    columns: u32,
    rows: u32,
    bounds: Bounds,
    layer: i32,
    draw_type: DrawType,
    visible: bool,
}

impl TileMap {
    /// Builds the tile sprites. Indices outside the sheet's tile range
    /// panic; the map data is expected to be range-checked by its
    /// producer.
    pub fn new(
        id: impl Into<String>,
        sheet: &TileSheet,
        indices: &TileIndexGrid,
        mut bounds: Bounds,
    ) -> Self {
        let id = id.into();
        let columns = indices.columns();
        let rows = indices.rows();
        let tile_w = sheet.tile_width();
        let tile_h = sheet.tile_height();

        bounds.set_size((columns * tile_w) as f32, (rows * tile_h) as f32);

        let mut tiles = Vec::with_capacity((columns * rows) as usize);
        let mut tile_num = 0;
        for x in 0..columns {
            for y in 0..rows {
                let tile_bounds = Bounds::new(
                    (x * tile_w) as f32,
                    (y * tile_h) as f32,
                    tile_w as f32,
                    tile_h as f32,
                );
                tiles.push(Sprite::new(
                    format!("{id}_tile_{tile_num}"),
                    sheet.tile(indices.get(x, y) as usize),
                    tile_bounds,
                ));
                tile_num += 1;
            }
        }

        Self {
            id,
            tiles,
            columns,
            rows,
            bounds,
            layer: 0,
            draw_type: DrawType::Static,
            visible: true,
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// The generated tile sprite at grid position `(x, y)`.
    pub fn tile(&self, x: u32, y: u32) -> &Sprite {
        &self.tiles[(x * self.rows + y) as usize]
    }
}

impl Component for TileMap {
    fn id(&self) -> &str {
        &self.id
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Tile maps have no use for properties; the call is ignored.
    fn add_property(&mut self, _property: Box<dyn Property>) {}

    /// Tile maps do nothing when updating.
    fn update(&mut self, _dt: f32, _input: &InputState, _camera: &CameraView) {}

    fn renderable(&self) -> Option<&dyn Renderable> {
        Some(self)
    }

    fn renderable_mut(&mut self) -> Option<&mut dyn Renderable> {
        Some(self)
    }
}

impl Renderable for TileMap {
    fn layer(&self) -> i32 {
        self.layer
    }

    fn set_layer(&mut self, layer: i32) {
        self.layer = layer;
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn draw_type(&self) -> DrawType {
        self.draw_type
    }

    fn set_draw_type(&mut self, draw_type: DrawType) {
        self.draw_type = draw_type;
    }

    fn render(&self, renderer: &mut Renderer, camera: &CameraView) {
        for tile in &self.tiles {
            let b = tile.bounds();
            let x1 = b.x() as i32;
            let x2 = (x1 as f32 + b.width()) as i32;
            let y1 = b.y() as i32;
            let y2 = (y1 as f32 + b.height()) as i32;

            if renderer.in_bounds(x1, y1)
                || renderer.in_bounds(x1, y2)
                || renderer.in_bounds(x2, y1)
                || renderer.in_bounds(x2, y2)
            {
                tile.render(renderer, camera);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::color::Color;
    use crate::renderer::grid::ColorGrid;

    fn sheet() -> TileSheet {
        // 2x1 tiles of 2x2 pixels: tile 0 red, tile 1 blue.
        let mut grid = ColorGrid::new(4, 2);
        for y in 0..2 {
            for x in 0..2 {
                grid.set(x, y, Color::RED);
                grid.set(x + 2, y, Color::BLUE);
            }
        }
        TileSheet::new(&grid, 2, 2)
    }

    #[test]
    fn generates_one_sprite_per_index() {
        let indices = TileIndexGrid::parse("3 2  0 1 0  1 0 1").unwrap();
        let map = TileMap::new("map", &sheet(), &indices, Bounds::default());

        assert_eq!(map.columns(), 3);
        assert_eq!(map.rows(), 2);
        assert_eq!(map.bounds().width(), 6.0);
        assert_eq!(map.bounds().height(), 4.0);

        // Tile (1, 0) holds index 1 -> blue.
        assert_eq!(map.tile(1, 0).texture().get(0, 0), Color::BLUE);
        // Its bounds sit at (2, 0).
        assert_eq!(map.tile(1, 0).bounds().x(), 2.0);
        assert_eq!(map.tile(1, 0).bounds().y(), 0.0);
    }

    #[test]
    fn renders_all_visible_tiles() {
        let indices = TileIndexGrid::parse("2 1  0 1").unwrap();
        let map = TileMap::new("map", &sheet(), &indices, Bounds::default());

        let mut renderer = Renderer::new(4, 2);
        map.render(&mut renderer, &CameraView::STATIC);
        let frame = renderer.frame();
        assert_eq!(frame.pixel(0, 0), Color::RED.packed());
        assert_eq!(frame.pixel(3, 1), Color::BLUE.packed());
    }

    #[test]
    fn culls_tiles_fully_outside_the_renderer() {
        // A 4-column map on a renderer only wide enough for one tile:
        // the far tiles never touch the buffer, close ones do.
        let indices = TileIndexGrid::parse("4 1  1 1 1 1").unwrap();
        let map = TileMap::new("map", &sheet(), &indices, Bounds::default());

        let mut renderer = Renderer::new(2, 2);
        map.render(&mut renderer, &CameraView::STATIC);
        let frame = renderer.frame();
        assert_eq!(frame.pixel(0, 0), Color::BLUE.packed());
        assert_eq!(frame.pixel(1, 1), Color::BLUE.packed());
    }

    #[test]
    fn update_and_properties_are_inert() {
        let indices = TileIndexGrid::parse("1 1  0").unwrap();
        let mut map = TileMap::new("map", &sheet(), &indices, Bounds::default());

        let before = map.bounds().clone();
        map.update(1.0, &InputState::new(1.0), &CameraView::STATIC);
        assert_eq!(map.bounds(), &before);
    }
}
