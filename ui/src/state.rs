use app_shell::UserProfile;
use leptos::*;

/// Session data shared through context. The profile signal is fed by the
/// external session source; components only read it.
#[derive(Clone)]
pub struct SessionCtx {
    pub profile: RwSignal<UserProfile>,
}

pub fn provide_session_ctx(profile: UserProfile) -> SessionCtx {
    let ctx = SessionCtx {
        profile: create_rw_signal(profile),
    };
    provide_context(ctx.clone());
    ctx
}

pub fn use_session_ctx() -> SessionCtx {
    use_context::<SessionCtx>().expect("SessionCtx not provided")
}
