//! Pure geometry and selection logic behind the outfit/room composer. The
//! canvas, drag events and PNG encoding stay in the frontend; this module
//! only computes positions and the snapshot crop box.

use itertools::Itertools;

use crate::documents::PlannerItem;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// New layer offset after a pointer drag.
pub fn drag_offset(current: Point, delta: Point) -> Point {
    Point {
        x: current.x + delta.x,
        y: current.y + delta.y,
    }
}

/// Top-left corner that centers an element of the given size on the desired
/// point.
pub fn position_center(desired: Point, width: f64, height: f64) -> Point {
    Point {
        x: desired.x - width / 2.0,
        y: desired.y - height / 2.0,
    }
}

/// Top-left corner that rests an element's bottom edge on the desired point.
pub fn position_bottom(desired: Point, width: f64, height: f64) -> Point {
    Point {
        x: desired.x - width / 2.0,
        y: desired.y - height,
    }
}

/// Crop box around the placed image layers, None when nothing is placed. The
/// snapshot is cut to this box before download.
pub fn bounding_box(rects: &[Rect]) -> Option<Rect> {
    let first = rects.first()?;
    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.right();
    let mut max_y = first.bottom();
    for rect in &rects[1..] {
        min_x = min_x.min(rect.x);
        min_y = min_y.min(rect.y);
        max_x = max_x.max(rect.right());
        max_y = max_y.max(rect.bottom());
    }
    Some(Rect {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    })
}

/// At most one placed layer may come from a download area; mixing two
/// distinct download sources is not possible on the device.
pub fn invalid_download_combo<'a>(sources: impl IntoIterator<Item = &'a str>) -> bool {
    sources
        .into_iter()
        .filter(|source| source.contains("DL Area:"))
        .unique()
        .count()
        > 1
}

/// Garden furniture can bring its companion pet along.
pub fn matching_pet<'a>(furniture: &PlannerItem, pets: &'a [PlannerItem]) -> Option<&'a PlannerItem> {
    match &furniture.pet {
        Some(pet) => pets.iter().find(|item| item.name == *pet),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn drag_adds_the_pointer_delta() {
        let moved = drag_offset(Point { x: 10.0, y: 20.0 }, Point { x: -4.0, y: 6.0 });
        assert_eq!(moved, Point { x: 6.0, y: 26.0 });
    }

    #[test]
    fn centered_and_bottom_anchored_positions() {
        let desired = Point { x: 50.0, y: 50.0 };
        assert_eq!(position_center(desired, 20.0, 10.0), Point { x: 40.0, y: 45.0 });
        assert_eq!(position_bottom(desired, 20.0, 10.0), Point { x: 40.0, y: 40.0 });
    }

    #[test]
    fn crop_box_wraps_all_layers() {
        let cropped = bounding_box(&[rect(10.0, 10.0, 20.0, 20.0), rect(40.0, 5.0, 10.0, 10.0)]);
        assert_eq!(cropped, Some(rect(10.0, 5.0, 40.0, 25.0)));
    }

    #[test]
    fn no_layers_means_no_crop_box() {
        assert_eq!(bounding_box(&[]), None);
    }

    #[test]
    fn two_distinct_download_sources_are_invalid() {
        assert!(invalid_download_combo(["DL Area: Spring", "DL Area: Winter"]));
        assert!(!invalid_download_combo(["DL Area: Spring", "DL Area: Spring"]));
        assert!(!invalid_download_combo(["DL Area: Spring", "Tama Mall"]));
        assert!(!invalid_download_combo(Vec::<&str>::new()));
    }

    #[test]
    fn furniture_pulls_its_companion_pet() {
        let furniture = PlannerItem {
            name: "Dog House".to_owned(),
            pet: Some("Pochitchi".to_owned()),
            ..Default::default()
        };
        let pets = vec![PlannerItem {
            name: "Pochitchi".to_owned(),
            ..Default::default()
        }];

        assert_eq!(matching_pet(&furniture, &pets).map(|pet| pet.name.as_str()), Some("Pochitchi"));

        let plain = PlannerItem {
            name: "Sofa".to_owned(),
            ..Default::default()
        };
        assert!(matching_pet(&plain, &pets).is_none());
    }
}
