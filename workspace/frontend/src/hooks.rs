/// State of the page's single API load. Initialized to `Loading` and
/// written exactly once, to either `Success` or `Error`; there is no
/// retry and no re-fetch on interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        let loading: FetchState<u32> = FetchState::Loading;
        assert!(loading.is_loading());
        assert!(!loading.is_success());
        assert_eq!(loading.data(), None);

        let success = FetchState::Success(42u32);
        assert!(success.is_success());
        assert_eq!(success.data(), Some(&42));
        assert_eq!(success.error(), None);

        let error: FetchState<u32> = FetchState::Error("boom".to_string());
        assert!(error.is_error());
        assert_eq!(error.error().map(String::as_str), Some("boom"));
        assert_eq!(error.data(), None);
    }
}
