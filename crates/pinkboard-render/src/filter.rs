use pinkboard_core::Filter;

/// Apply `brightness()` then `contrast()` to straight RGB in `[0, 1]`
pub fn apply_filter(filter: Filter, rgb: [f32; 3]) -> [f32; 3] {
    if filter.is_none() {
        return rgb;
    }
    rgb.map(|c| {
        let bright = (c * filter.brightness).clamp(0.0, 1.0);
        ((bright - 0.5) * filter.contrast + 0.5).clamp(0.0, 1.0)
    })
}
