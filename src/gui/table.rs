use crate::geometry::Vec2;
use crate::gui::element::GuiElement;
use crate::gui::label::BasicLabel;
use crate::gui::text_element::GuiTextElement;
use crate::render::RenderBatch;
use crate::screen::ScreenConfig;

/// The kinds of thing a table can lay out. A closed enum keeps items
/// retrievable as their concrete types (`item_mut` + match) without any
/// downcasting.
pub enum TableItem {
    Label(BasicLabel),
    Element(GuiElement),
    Text(GuiTextElement),
}

impl TableItem {
    pub fn width(&self) -> f32 {
        match self {
            TableItem::Label(label) => label.width(),
            TableItem::Element(element) => element.width(),
            TableItem::Text(text) => text.width(),
        }
    }

    pub fn height(&self) -> f32 {
        match self {
            TableItem::Label(label) => label.height(),
            TableItem::Element(element) => element.height(),
            TableItem::Text(text) => text.height(),
        }
    }

    /// Bottom-left corner, whatever the item. Labels report their
    /// baseline-corrected position here.
    pub fn position(&self) -> Vec2 {
        match self {
            TableItem::Label(label) => label.position(),
            TableItem::Element(element) => element.position(),
            TableItem::Text(text) => text.position(),
        }
    }

    /// Places the item by its bottom-left corner. For labels this moves
    /// the top anchor up by the measured height so every item kind lines
    /// up under the same convention.
    pub fn set_position(&mut self, position: Vec2) {
        match self {
            TableItem::Label(label) => {
                label.set_position(Vec2::new(position.x, position.y + label.height()));
            }
            TableItem::Element(element) => element.set_position(position),
            TableItem::Text(text) => text.set_position(position),
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        match self {
            TableItem::Label(label) => label.set_visible(visible),
            TableItem::Element(element) => element.set_visible(visible),
            TableItem::Text(text) => text.set_visible(visible),
        }
    }

    pub fn draw(&self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        match self {
            TableItem::Label(label) => label.draw(batch),
            TableItem::Element(element) => element.draw(batch),
            TableItem::Text(text) => text.draw(batch),
        }
    }
}

/// Lays items out in a single direction: stacked rows (top to bottom) or
/// a left-to-right column run. Items keep insertion order for drawing and
/// can be fetched back for later mutation.
///
/// Mixing `add_row` and `add_column` on one table is unsupported; make two
/// tables instead.
pub struct Table {
    position: Vec2,
    width: f32,
    height: f32,
    separation: Vec2,
    visible: bool,
    items: Vec<TableItem>,
}

impl Table {
    pub const DEFAULT_SEPARATION: f32 = 15.0;

    pub fn new(position: Vec2, width: f32, height: f32) -> Self {
        Table {
            position,
            width,
            height,
            separation: Vec2::new(Table::DEFAULT_SEPARATION, Table::DEFAULT_SEPARATION),
            visible: true,
            items: Vec::new(),
        }
    }

    /// Table covering the whole screen, for menu-style layouts that stack
    /// from the top of the display.
    pub fn full_screen(screen: &ScreenConfig) -> Self {
        Table::new(Vec2::ZERO, screen.width, screen.height)
    }

    pub fn set_separation(&mut self, x: f32, y: f32) {
        self.separation = Vec2::new(x, y);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn top(&self) -> f32 {
        self.position.y + self.height
    }

    /// Stacks an item below the previous one, horizontally centered on the
    /// table. The first item's top sits one separation below the table
    /// top; every later item's top sits one separation below the previous
    /// item's bottom.
    pub fn add_row(&mut self, mut item: TableItem) -> &mut TableItem {
        let x = self.position.x + self.width / 2.0 - item.width() / 2.0;
        let top = match self.items.last() {
            None => self.top() - self.separation.y,
            Some(last) => last.position().y - self.separation.y,
        };
        item.set_position(Vec2::new(x, top - item.height()));

        let index = self.items.len();
        self.items.push(item);
        &mut self.items[index]
    }

    /// Runs an item rightward: the first sits at the table position, each
    /// later one starts one separation after the previous item's right
    /// edge, sharing its y.
    pub fn add_column(&mut self, mut item: TableItem) -> &mut TableItem {
        let position = match self.items.last() {
            None => self.position,
            Some(last) => Vec2::new(
                last.position().x + last.width() + self.separation.x,
                last.position().y,
            ),
        };
        item.set_position(position);

        let index = self.items.len();
        self.items.push(item);
        &mut self.items[index]
    }

    /// Appends without layout; the caller has already positioned the item.
    pub fn add_item(&mut self, item: TableItem) -> &mut TableItem {
        let index = self.items.len();
        self.items.push(item);
        &mut self.items[index]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&TableItem> {
        self.items.get(index)
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut TableItem> {
        self.items.get_mut(index)
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut TableItem> {
        self.items.iter_mut()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn switch_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Draws every item in insertion order. Hidden tables draw nothing.
    pub fn draw(&self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        if !self.visible {
            return Ok(());
        }
        for item in &self.items {
            item.draw(batch)?;
        }
        Ok(())
    }
}
