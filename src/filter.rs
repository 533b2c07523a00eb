//! Project card filtering by category.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// Value of a filter button's `data-filter` attribute; "all" (or nothing)
    /// shows every card.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some("all") => Filter::All,
            Some(cat) => Filter::Category(cat.to_string()),
        }
    }

    /// Cards may list several categories in `data-category`; any substring
    /// match counts. A card without the attribute only shows under `All`.
    pub fn matches(&self, card_category: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(cat) => card_category.is_some_and(|c| c.contains(cat.as_str())),
        }
    }
}

/// Visual change to apply to one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTransition {
    /// `display:block` now, fade/scale in after the show delay.
    Show,
    /// fade/scale out now, `display:none` after the hide delay.
    Hide,
}

pub fn plan<'a, I>(filter: &Filter, cards: I) -> Vec<CardTransition>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    cards
        .into_iter()
        .map(|cat| if filter.matches(cat) { CardTransition::Show } else { CardTransition::Hide })
        .collect()
}

/// Per-card generation counters. Every transition bumps its card's counter;
/// a delayed style change only applies if no newer transition has happened
/// since it was scheduled.
#[derive(Debug, Default)]
pub struct CardEpochs {
    epochs: Vec<u64>,
}

impl CardEpochs {
    pub fn new(cards: usize) -> Self {
        Self { epochs: vec![0; cards] }
    }

    pub fn bump(&mut self, card: usize) -> u64 {
        match self.epochs.get_mut(card) {
            Some(e) => {
                *e += 1;
                *e
            }
            None => 0,
        }
    }

    pub fn is_current(&self, card: usize, epoch: u64) -> bool {
        self.epochs.get(card) == Some(&epoch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_filter_values() {
        assert_eq!(Filter::parse(Some("all")), Filter::All);
        assert_eq!(Filter::parse(None), Filter::All);
        assert_eq!(Filter::parse(Some("devops")), Filter::Category("devops".into()));
    }

    #[test]
    fn plan_partitions_cards() {
        let cards = [Some("cloud devops"), Some("web"), None, Some("devops")];
        let f = Filter::parse(Some("devops"));
        assert_eq!(
            plan(&f, cards),
            vec![CardTransition::Show, CardTransition::Hide, CardTransition::Hide, CardTransition::Show]
        );
        assert!(plan(&Filter::All, cards).iter().all(|t| *t == CardTransition::Show));
    }

    #[test]
    fn stale_card_timers_are_skipped() {
        let mut epochs = CardEpochs::new(2);
        let hide = epochs.bump(0);
        // filter switched back before the hide delay elapsed
        let show = epochs.bump(0);
        assert!(!epochs.is_current(0, hide));
        assert!(epochs.is_current(0, show));
        let other = epochs.bump(1);
        assert!(epochs.is_current(1, other));
        assert_eq!(epochs.bump(7), 0);
        assert!(!epochs.is_current(7, 0));
    }
}
