//! Component catalogue
//!
//! Every factory takes its properties plus the caller's children and
//! returns a [`Node`](forma_core::Node). Roots carry `data-slot`, and the
//! caller's `class` is appended after the component's own classes.

pub mod alert;
pub mod aspect_ratio;
pub mod avatar;
pub mod badge;
pub mod button;
#[cfg(feature = "calendar")]
pub mod calendar;
pub mod card;
pub mod checkbox;
pub mod form;
pub mod input;
pub mod label;
pub mod progress;
pub mod radio_group;
pub mod separator;
pub mod skeleton;
pub mod switch;
pub mod textarea;
pub mod toast;
pub mod toggle;
pub mod toggle_group;

pub use alert::{AlertProps, AlertVariant, alert, alert_description, alert_title, alert_variants};
pub use aspect_ratio::{AspectRatioProps, aspect_ratio};
pub use avatar::{AvatarImageProps, avatar, avatar_fallback, avatar_image};
pub use badge::{BadgeProps, BadgeVariant, badge, badge_class, badge_variants};
pub use button::{
	ButtonProps, ButtonSize, ButtonType, ButtonVariant, button, button_class, button_variants,
};
#[cfg(feature = "calendar")]
pub use calendar::{CalendarProps, calendar, month_weeks};
pub use card::{
	card, card_action, card_content, card_description, card_footer, card_header, card_title,
};
pub use checkbox::{CheckboxProps, checkbox};
pub use form::{
	FormField, form_control, form_description, form_item, form_label, form_message,
};
pub use input::{InputProps, input};
pub use label::{LabelProps, label};
pub use progress::{ProgressProps, progress};
pub use radio_group::{RadioGroupItemProps, RadioGroupProps, radio_group, radio_group_item};
pub use separator::{SeparatorProps, separator};
pub use skeleton::skeleton;
pub use switch::{SwitchProps, switch};
pub use textarea::{TextareaProps, textarea};
pub use toast::{
	DEFAULT_DURATION_MS, ToastProps, ToastVariant, toast, toast_action, toast_close,
	toast_description, toast_title, toast_variants, toaster,
};
pub use toggle::{ToggleProps, ToggleSize, ToggleVariant, toggle, toggle_class, toggle_variants};
pub use toggle_group::{
	ToggleGroupItemProps, ToggleGroupProps, ToggleGroupType, toggle_group, toggle_group_item,
};
