pub mod damage_modifiers;
pub mod immunity;
pub mod speed;
pub mod stat_modifiers;
pub mod type_changers;
pub mod weather_setters;
