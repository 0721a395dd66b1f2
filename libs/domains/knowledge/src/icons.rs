//! Icon catalog offered to the enrichment model.
//!
//! Names match the front-end icon components one-to-one, including the
//! `BuildindStoreIcon` spelling the UI ships with.

use validator::ValidationError;

pub const AVAILABLE_ICONS: &[&str] = &[
    "ArrowLeftIcon",
    "ArrowUpIcon",
    "ArrowRightIcon",
    "ArrowDownIcon",
    "BrandLineIcon",
    "CodeIcon",
    "BookOpenIcon",
    "ChartBarIcon",
    "ChatBubbleIcon",
    "DocumentTextIcon",
    "HomeIcon",
    "LightBulbIcon",
    "UsersIcon",
    "CogIcon",
    "CheckIcon",
    "ChevronLeftIcon",
    "CircleCheckIcon",
    "ClipboardIcon",
    "DotsVerticalIcon",
    "DownloadIcon",
    "EyeIcon",
    "EyeOffIcon",
    "FacebookIcon",
    "FiltersIcon",
    "HorizontalLinesIcon",
    "InstagramIcon",
    "ListIcon",
    "MailIcon",
    "MapPinIcon",
    "PencilIcon",
    "PhotoIcon",
    "PlusIcon",
    "RefreshIcon",
    "ShoppingCartIcon",
    "TagIcon",
    "TikTokIcon",
    "TrashIcon",
    "WhatsappIcon",
    "XIcon",
    "ZoomIcon",
    "BuildindStoreIcon",
    "SparklesIcon",
    "CoffeeIcon",
    "ToolsKitchen3Icon",
    "HammerIcon",
    "MusicIcon",
    "ScissorsIcon",
    "DeviceLaptopIcon",
    "WreckingBallIcon",
    "PlaneIcon",
    "LeafIcon",
    "Gamepad2Icon",
    "StopwatchIcon",
    "FlowerIcon",
    "BrushIcon",
    "BrainIcon",
    "AlertTriangleIcon",
    "BoltIcon",
    "CardsIcon",
    "ExclamationCircleIcon",
    "LayoutGridIcon",
    "LockIcon",
    "StatsIcon",
    "ShirtIcon",
    "BookIcon",
    "CameraIcon",
    "CarIcon",
    "HeartIcon",
    "UmbrellaIcon",
    "PaletteIcon",
    "StethoscopeIcon",
    "CampFireIcon",
    "PizzaIcon",
    "BriefcaseIcon",
    "GiftIcon",
    "HeadphonesIcon",
    "CalendarIcon",
    "TruckIcon",
];

pub fn is_known_icon(name: &str) -> bool {
    AVAILABLE_ICONS.contains(&name)
}

/// `validator` hook for icon fields.
pub fn validate_icon(icon: &str) -> Result<(), ValidationError> {
    if is_known_icon(icon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("unknown_icon");
        err.message = Some(format!("'{}' is not in the icon catalog", icon).into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_no_duplicates() {
        let mut names = AVAILABLE_ICONS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AVAILABLE_ICONS.len());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(is_known_icon("LightBulbIcon"));
        assert!(!is_known_icon("lightbulbicon"));
        assert!(!is_known_icon(""));
    }
}
