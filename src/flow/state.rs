use serde::Serialize;

use super::configuration::FlowConfiguration;

/// Current page of a flow. Only `NavigationController` changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowState {
    current_index: usize,
}

/// Which flow controls the host should show for the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlVisibility {
    pub skip: bool,
    pub previous: bool,
    pub next: bool,
    pub done: bool,
    pub app_bar_back: bool,
}

impl FlowState {
    pub(crate) fn new(current_index: usize) -> Self {
        Self { current_index }
    }

    pub(crate) fn set_current_index(&mut self, index: usize) {
        self.current_index = index;
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Orientation-aware: in RTL the first page is the highest index
    pub fn is_first(&self, configuration: &FlowConfiguration) -> bool {
        self.current_index == configuration.first_page_index()
    }

    pub fn is_last(&self, configuration: &FlowConfiguration) -> bool {
        self.current_index == configuration.last_viewable_page_index()
    }

    /// 1-based position in reading order, and the total page count
    pub fn progress(&self, configuration: &FlowConfiguration) -> (usize, usize) {
        let total = configuration.page_count();
        let position = if configuration.is_rtl() {
            total - self.current_index
        } else {
            self.current_index + 1
        };
        (position, total)
    }

    pub fn controls(&self, configuration: &FlowConfiguration) -> ControlVisibility {
        let is_first = self.is_first(configuration);
        let is_last = self.is_last(configuration);
        ControlVisibility {
            skip: configuration.can_skip() && !is_last,
            previous: configuration.show_previous_button() && !is_first,
            next: !is_last,
            done: is_last,
            app_bar_back: configuration.show_back_button_in_bar(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::types::PageSpec;

    fn configuration(pages: usize, rtl: bool) -> FlowConfiguration {
        FlowConfiguration::builder("state_test")
            .pages((0..pages).map(|i| PageSpec::new(format!("p{}", i))))
            .rtl(rtl)
            .build()
            .unwrap()
    }

    #[test]
    fn test_first_and_last_follow_orientation() {
        let ltr = configuration(3, false);
        assert!(FlowState::new(0).is_first(&ltr));
        assert!(FlowState::new(2).is_last(&ltr));

        let rtl = configuration(3, true);
        assert!(FlowState::new(2).is_first(&rtl));
        assert!(FlowState::new(0).is_last(&rtl));
        assert!(!FlowState::new(0).is_first(&rtl));
    }

    #[test]
    fn test_progress_in_reading_order() {
        let ltr = configuration(4, false);
        assert_eq!(FlowState::new(0).progress(&ltr), (1, 4));
        assert_eq!(FlowState::new(3).progress(&ltr), (4, 4));

        let rtl = configuration(4, true);
        assert_eq!(FlowState::new(3).progress(&rtl), (1, 4));
        assert_eq!(FlowState::new(0).progress(&rtl), (4, 4));
    }

    #[test]
    fn test_controls_on_first_middle_and_last_page() {
        let config = configuration(3, false);

        let first = FlowState::new(0).controls(&config);
        assert!(first.skip && first.next);
        assert!(!first.previous && !first.done);

        let middle = FlowState::new(1).controls(&config);
        assert!(middle.skip && middle.next && middle.previous);
        assert!(!middle.done);

        let last = FlowState::new(2).controls(&config);
        assert!(last.done && last.previous);
        assert!(!last.skip && !last.next);
        assert!(!last.app_bar_back);
    }

    #[test]
    fn test_controls_respect_skip_policy() {
        let config = FlowConfiguration::builder("no_skip")
            .pages(vec![PageSpec::new("a"), PageSpec::new("b")])
            .can_skip(false)
            .show_back_button_in_bar(true)
            .build()
            .unwrap();

        let controls = FlowState::new(0).controls(&config);
        assert!(!controls.skip);
        assert!(controls.app_bar_back);
    }
}
