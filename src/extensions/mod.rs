/// Press delivery shared by every interactive component.
pub mod press;
