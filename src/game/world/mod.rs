// World state: regions, the dialogue zone and scripted conversations

pub mod dialogue;
pub mod regions;

pub use dialogue::{Conversation, ConversationId, DialogueDirector, Line, QuestStage, Speaker};
pub use regions::{
    DialogueZoneConfig, RegionChange, RegionConfig, RegionId, RegionTransitionController, Side,
    ZoneChange,
};
