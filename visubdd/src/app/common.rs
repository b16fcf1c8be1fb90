use shape_layout::Color;

pub fn to_color32(color: Color) -> egui::Color32 {
    let [r, g, b] = color.rgb();
    egui::Color32::from_rgb(r, g, b)
}
