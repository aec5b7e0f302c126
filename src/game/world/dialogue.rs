// Scripted conversations and quest progression

use log::info;

/// Index into the conversation list
pub type ConversationId = usize;

/// Who is talking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Player,
    King,
    Barkeep,
}

impl Speaker {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Player => "Geralt",
            Self::King => "King",
            Self::Barkeep => "Keir",
        }
    }
}

/// A single line of dialogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub speaker: Speaker,
    pub text: &'static str,
}

/// Quest stages, in the order they are reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QuestStage {
    /// Talk to the king
    MeetKing,
    /// Ask the barkeeper about the demon
    AskBarkeep,
    /// Kill the demon in the temple
    SlayDemon,
    /// Demon is dead
    Complete,
}

/// A fixed script that is read through once
#[derive(Debug, Clone)]
pub struct Conversation {
    lines: Vec<Line>,
    /// Stage the conversation becomes available in
    pub opens_at: QuestStage,
    /// Stage reached once the last line is read
    pub completes_to: QuestStage,
    cursor: usize,
    finished: bool,
}

impl Conversation {
    pub fn new(lines: Vec<Line>, opens_at: QuestStage, completes_to: QuestStage) -> Self {
        Self {
            lines,
            opens_at,
            completes_to,
            cursor: 0,
            finished: false,
        }
    }

    /// Line currently on screen
    pub fn current_line(&self) -> Option<&Line> {
        if self.finished {
            return None;
        }
        self.lines.get(self.cursor)
    }

    /// Show the next line. Returns false once the script is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.finished {
            return false;
        }

        self.cursor += 1;
        if self.cursor >= self.lines.len() {
            self.finished = true;
        }
        !self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Check if this conversation can start in `stage`
    pub fn is_available(&self, stage: QuestStage) -> bool {
        !self.finished && self.opens_at == stage
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The king's request: five lines, the king speaks first
pub fn king_conversation() -> Conversation {
    use Speaker::*;

    Conversation::new(
        vec![
            Line { speaker: King, text: "Geralt, I have a job for you." },
            Line { speaker: Player, text: "Who needs dealing with this time?" },
            Line { speaker: King, text: "A demon. Lately it has been attacking people." },
            Line { speaker: Player, text: "Who can tell me more about it?" },
            Line { speaker: King, text: "Visit Keir at the tavern, he may know about the demon." },
        ],
        QuestStage::MeetKing,
        QuestStage::AskBarkeep,
    )
}

/// The barkeeper's hint: four lines, the barkeeper speaks first
pub fn barkeep_conversation() -> Conversation {
    use Speaker::*;

    Conversation::new(
        vec![
            Line { speaker: Barkeep, text: "Greetings, witcher. What brings you here?" },
            Line { speaker: Player, text: "Hello Keir, I need to find out about the demon." },
            Line { speaker: Barkeep, text: "Very tall and strong, but slow. Good luck!" },
            Line { speaker: Player, text: "Thank you for your help." },
        ],
        QuestStage::AskBarkeep,
        QuestStage::SlayDemon,
    )
}

/// Owns every conversation and the quest stage they drive
#[derive(Debug, Clone)]
pub struct DialogueDirector {
    conversations: Vec<Conversation>,
    active: Option<ConversationId>,
    stage: QuestStage,
}

impl DialogueDirector {
    pub fn new(conversations: Vec<Conversation>) -> Self {
        Self {
            conversations,
            active: None,
            stage: QuestStage::MeetKing,
        }
    }

    pub fn stage(&self) -> QuestStage {
        self.stage
    }

    /// Jump straight to `stage`
    pub fn set_stage(&mut self, stage: QuestStage) {
        if self.stage != stage {
            info!("Quest stage {:?} -> {:?}", self.stage, stage);
            self.stage = stage;
        }
    }

    pub fn active(&self) -> Option<ConversationId> {
        self.active
    }

    pub fn is_talking(&self) -> bool {
        self.active.is_some()
    }

    pub fn conversation(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.get(id)
    }

    /// Line of the open conversation
    pub fn current_line(&self) -> Option<&Line> {
        self.active
            .and_then(|id| self.conversations.get(id))
            .and_then(Conversation::current_line)
    }

    /// Open conversation `id` if the quest has reached it
    pub fn try_open(&mut self, id: ConversationId) -> bool {
        if self.active.is_some() {
            return false;
        }

        let stage = self.stage;
        match self.conversations.get(id) {
            Some(conversation) if conversation.is_available(stage) => {
                info!("Conversation {} opened", id);
                self.active = Some(id);
                true
            }
            _ => false,
        }
    }

    /// Advance the open conversation.
    ///
    /// Returns the stage reached when this closes the conversation.
    pub fn advance(&mut self) -> Option<QuestStage> {
        let id = self.active?;
        let conversation = self.conversations.get_mut(id)?;

        if conversation.advance() {
            return None;
        }

        let next = conversation.completes_to;
        self.active = None;
        info!("Conversation {} finished", id);
        self.set_stage(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn director() -> DialogueDirector {
        DialogueDirector::new(vec![king_conversation(), barkeep_conversation()])
    }

    #[test]
    fn test_king_speaks_first_and_alternates() {
        let mut conversation = king_conversation();
        let mut speakers = vec![conversation.current_line().unwrap().speaker];
        while conversation.advance() {
            speakers.push(conversation.current_line().unwrap().speaker);
        }

        use Speaker::*;
        assert_eq!(speakers, vec![King, Player, King, Player, King]);
        assert!(conversation.is_finished());
        assert!(conversation.current_line().is_none());
    }

    #[test]
    fn test_barkeep_speaks_first() {
        let conversation = barkeep_conversation();
        assert_eq!(conversation.len(), 4);
        assert_eq!(
            conversation.current_line().unwrap().speaker,
            Speaker::Barkeep
        );
    }

    #[test]
    fn test_barkeep_locked_until_king_is_done() {
        let mut director = director();
        assert!(!director.try_open(1));
        assert!(director.try_open(0));
    }

    #[test]
    fn test_quest_progression() {
        let mut director = director();
        assert!(director.try_open(0));
        assert!(director.is_talking());

        for _ in 0..4 {
            assert_eq!(director.advance(), None);
        }
        assert_eq!(director.advance(), Some(QuestStage::AskBarkeep));
        assert!(!director.is_talking());

        // Finished conversations never reopen
        assert!(!director.try_open(0));

        assert!(director.try_open(1));
        for _ in 0..3 {
            director.advance();
        }
        assert_eq!(director.advance(), Some(QuestStage::SlayDemon));
        assert_eq!(director.stage(), QuestStage::SlayDemon);
    }

    #[test]
    fn test_advance_without_conversation() {
        let mut director = director();
        assert_eq!(director.advance(), None);
        assert!(director.current_line().is_none());
    }

    #[test]
    fn test_only_one_conversation_at_a_time() {
        let mut director = director();
        director.try_open(0);
        director.set_stage(QuestStage::MeetKing);
        assert!(!director.try_open(0));
        assert_eq!(director.active(), Some(0));
    }
}
