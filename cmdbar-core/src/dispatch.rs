//! Dispatch of selected actions onto the host navigation capability.

use crate::actions::{Action, Perform};
use crate::error::PaletteError;
use crate::nav::{NavigationContext, resolve_section_path};

/// Host navigation capability.
///
/// Both primitives are fire-and-forget from the core's perspective; in a
/// browser deployment a call may tear the page down and never return
/// control to the palette.
pub trait NavigationHost {
    /// Rewrite the current path in place (same origin).
    fn rewrite_path(&mut self, path: &str) -> anyhow::Result<()>;

    /// Navigate to an absolute URL on another origin.
    fn navigate_external(&mut self, url: &str) -> anyhow::Result<()>;
}

/// Executes selected actions against a [`NavigationHost`].
///
/// One selection is processed fully before another can occur; preventing
/// double-submission is the UI layer's job.
pub struct Dispatcher<H: NavigationHost> {
    host: H,
}

impl<H: NavigationHost> Dispatcher<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Perform the selected action's side effect, exactly once.
    ///
    /// Section rewrites go through [`resolve_section_path`] first, so a
    /// selection made from a path without org/project segments surfaces
    /// as [`PaletteError::InsufficientPath`] instead of navigating to a
    /// broken URL. Host failures propagate; nothing is retried or
    /// swallowed.
    pub fn select(
        &mut self,
        action: &Action,
        ctx: &NavigationContext,
    ) -> Result<(), PaletteError> {
        tracing::debug!("dispatching action '{}'", action.id);
        match action.perform {
            Perform::RewritePath { section } => {
                let path = resolve_section_path(ctx, section)?;
                self.host.rewrite_path(&path)?;
            }
            Perform::NavigateAbsolute { path } => {
                self.host.rewrite_path(path)?;
            }
            Perform::NavigateExternal { url } => {
                self.host.navigate_external(url)?;
            }
            Perform::Nothing => {}
        }
        Ok(())
    }

    /// Consume the dispatcher and hand the host back.
    pub fn into_host(self) -> H {
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionId;

    /// Records every host call instead of navigating.
    #[derive(Default)]
    struct RecordingHost {
        rewrites: Vec<String>,
        externals: Vec<String>,
        fail_next: bool,
    }

    impl NavigationHost for RecordingHost {
        fn rewrite_path(&mut self, path: &str) -> anyhow::Result<()> {
            if self.fail_next {
                anyhow::bail!("host rejected navigation");
            }
            self.rewrites.push(path.to_string());
            Ok(())
        }

        fn navigate_external(&mut self, url: &str) -> anyhow::Result<()> {
            self.externals.push(url.to_string());
            Ok(())
        }
    }

    fn action(perform: Perform) -> Action {
        Action {
            id: ActionId("under-test"),
            name: "Under Test",
            section: "Test",
            perform,
            ..Default::default()
        }
    }

    #[test]
    fn rewrite_goes_through_section_resolver() {
        let mut dispatcher = Dispatcher::new(RecordingHost::default());
        let ctx = NavigationContext::new("/org1/proj1/content");

        dispatcher
            .select(&action(Perform::RewritePath { section: "schema" }), &ctx)
            .unwrap();

        let host = dispatcher.into_host();
        assert_eq!(host.rewrites, ["org1/proj1/schema"]);
        assert!(host.externals.is_empty());
    }

    #[test]
    fn absolute_navigation_ignores_current_path() {
        let mut dispatcher = Dispatcher::new(RecordingHost::default());

        for path in ["/org1/proj1/content", "/", "/somewhere/else"] {
            let ctx = NavigationContext::new(path);
            dispatcher
                .select(&action(Perform::NavigateAbsolute { path: "/create" }), &ctx)
                .unwrap();
        }

        assert_eq!(dispatcher.into_host().rewrites, ["/create", "/create", "/create"]);
    }

    #[test]
    fn external_navigation_uses_external_primitive() {
        let mut dispatcher = Dispatcher::new(RecordingHost::default());
        let ctx = NavigationContext::new("/org1/proj1/content");

        dispatcher
            .select(
                &action(Perform::NavigateExternal { url: "https://cmdbar.dev/docs" }),
                &ctx,
            )
            .unwrap();

        let host = dispatcher.into_host();
        assert!(host.rewrites.is_empty());
        assert_eq!(host.externals, ["https://cmdbar.dev/docs"]);
    }

    #[test]
    fn nothing_touches_no_primitive() {
        let mut dispatcher = Dispatcher::new(RecordingHost::default());
        let ctx = NavigationContext::new("/org1/proj1/content");

        dispatcher.select(&action(Perform::Nothing), &ctx).unwrap();

        let host = dispatcher.into_host();
        assert!(host.rewrites.is_empty());
        assert!(host.externals.is_empty());
    }

    #[test]
    fn short_path_error_reaches_caller_before_host() {
        let mut dispatcher = Dispatcher::new(RecordingHost::default());
        let ctx = NavigationContext::new("/");

        let result = dispatcher.select(&action(Perform::RewritePath { section: "schema" }), &ctx);
        assert!(matches!(result, Err(PaletteError::InsufficientPath(_))));
        assert!(dispatcher.into_host().rewrites.is_empty());
    }

    #[test]
    fn host_failure_is_propagated() {
        let mut dispatcher = Dispatcher::new(RecordingHost { fail_next: true, ..Default::default() });
        let ctx = NavigationContext::new("/org1/proj1/content");

        let result = dispatcher.select(&action(Perform::NavigateAbsolute { path: "/" }), &ctx);
        assert!(matches!(result, Err(PaletteError::Host(_))));
    }
}
