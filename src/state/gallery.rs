/// Gallery state for the detail screen
///
/// The gallery is a fixed set of image slots, each holding the name of a
/// bundled image asset. The slot map lives only as long as one detail
/// screen; navigating back discards it. All mutation goes through the
/// update loop applying a picker selection, so the picker dialog itself
/// never touches the map.

use std::collections::BTreeMap;

/// Configuration for a gallery: the selectable image catalog and the
/// default slot assignments. Passed at construction so the view logic
/// stays independent of the bundled asset names.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Candidate image names offered by the picker dialog
    pub catalog: Vec<String>,
    /// Initial (slot index, image name) assignments
    pub default_slots: Vec<(usize, String)>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let catalog = [
            "API Gateway",
            "EC2",
            "Service Holder",
            "Simple Storage Service",
        ];

        Self {
            catalog: catalog.iter().map(|s| s.to_string()).collect(),
            default_slots: vec![
                (0, "API Gateway".to_string()),
                (1, "EC2".to_string()),
                (2, "Service Holder".to_string()),
                (3, "Simple Storage Service".to_string()),
            ],
        }
    }
}

/// In-memory state for one gallery instance.
#[derive(Debug, Clone)]
pub struct Gallery {
    /// Slot index -> assigned image name, iterated in ascending slot order
    slots: BTreeMap<usize, String>,
    /// Slot the user tapped, if the picker is routing a selection
    pub selected_slot: Option<usize>,
    /// Image name proposed by the last picker tap
    pub proposed_image: Option<String>,
    /// Whether the picker dialog is showing
    pub picker_open: bool,
    /// Tile scale factor (no gesture wiring, stored scale only)
    pub zoom: f32,
}

impl Gallery {
    /// Create a gallery populated with the configured default assignments.
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            slots: config.default_slots.iter().cloned().collect(),
            selected_slot: None,
            proposed_image: None,
            picker_open: false,
            zoom: 1.0,
        }
    }

    /// Slot entries in ascending slot-index order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots.iter().map(|(index, name)| (*index, name.as_str()))
    }

    /// Record a tapped slot as the active selection and open the picker.
    pub fn select_slot(&mut self, index: usize) {
        self.proposed_image = self.slots.get(&index).cloned();
        self.selected_slot = Some(index);
        self.picker_open = true;
    }

    /// Apply a picker choice to the active slot.
    ///
    /// No-op when no slot is active. The dialog stays open; closing it is
    /// the caller's responsibility.
    pub fn apply_pick(&mut self, name: String) {
        if let Some(index) = self.selected_slot {
            self.slots.insert(index, name.clone());
            self.proposed_image = Some(name);
        }
    }

    /// Close the picker and clear the transient selection state.
    /// Leaves the slot assignments untouched.
    pub fn dismiss_picker(&mut self) {
        self.picker_open = false;
        self.selected_slot = None;
        self.proposed_image = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignments(gallery: &Gallery) -> Vec<(usize, String)> {
        gallery
            .slots()
            .map(|(index, name)| (index, name.to_string()))
            .collect()
    }

    #[test]
    fn defaults_populate_four_slots() {
        let gallery = Gallery::new(&GalleryConfig::default());

        assert_eq!(
            assignments(&gallery),
            vec![
                (0, "API Gateway".to_string()),
                (1, "EC2".to_string()),
                (2, "Service Holder".to_string()),
                (3, "Simple Storage Service".to_string()),
            ]
        );
        assert_eq!(gallery.selected_slot, None);
        assert!(!gallery.picker_open);
    }

    #[test]
    fn tap_then_pick_updates_exactly_that_slot() {
        let mut gallery = Gallery::new(&GalleryConfig::default());

        gallery.select_slot(2);
        assert!(gallery.picker_open);
        assert_eq!(gallery.proposed_image.as_deref(), Some("Service Holder"));

        gallery.apply_pick("EC2".to_string());

        assert_eq!(
            assignments(&gallery),
            vec![
                (0, "API Gateway".to_string()),
                (1, "EC2".to_string()),
                (2, "EC2".to_string()),
                (3, "Simple Storage Service".to_string()),
            ]
        );
        assert_eq!(gallery.proposed_image.as_deref(), Some("EC2"));
    }

    #[test]
    fn pick_keeps_dialog_open_until_dismissed() {
        let mut gallery = Gallery::new(&GalleryConfig::default());

        gallery.select_slot(0);
        gallery.apply_pick("EC2".to_string());
        assert!(gallery.picker_open);

        gallery.dismiss_picker();
        assert!(!gallery.picker_open);
        assert_eq!(gallery.selected_slot, None);
        assert_eq!(gallery.proposed_image, None);
    }

    #[test]
    fn dismiss_without_pick_leaves_slots_unchanged() {
        let mut gallery = Gallery::new(&GalleryConfig::default());
        let before = assignments(&gallery);

        gallery.select_slot(1);
        gallery.dismiss_picker();

        assert_eq!(assignments(&gallery), before);
    }

    #[test]
    fn pick_without_active_slot_is_a_no_op() {
        let mut gallery = Gallery::new(&GalleryConfig::default());
        let before = assignments(&gallery);

        gallery.apply_pick("EC2".to_string());

        assert_eq!(assignments(&gallery), before);
        assert_eq!(gallery.proposed_image, None);
    }

    #[test]
    fn tapping_a_missing_slot_proposes_nothing() {
        let mut gallery = Gallery::new(&GalleryConfig {
            catalog: vec!["EC2".to_string()],
            default_slots: vec![],
        });

        gallery.select_slot(7);

        assert_eq!(gallery.selected_slot, Some(7));
        assert_eq!(gallery.proposed_image, None);
        assert!(gallery.picker_open);
    }
}
