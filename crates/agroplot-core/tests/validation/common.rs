use agroplot_core::{DrawingElement, ElementType, Plant, Structure, Terrain};

pub fn tomato() -> Plant {
    Plant::new("tomato", "Tomato", "50x80cm", "vegetable", "#E53935")
}

pub fn mulch() -> Terrain {
    Terrain::new("mulch", "Straw mulch", "soil-cover", "#C8A165").with_brush_thickness(12.0)
}

pub fn shed() -> Structure {
    Structure::new("shed", "Tool shed", "building", "#795548", 3.0, 2.5)
}

pub fn rectangle(id: u64) -> DrawingElement {
    DrawingElement::new(id, ElementType::Rectangle, 10.0, 20.0).with_size(5.0, 3.0)
}
