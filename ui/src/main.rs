#[cfg(feature = "ssr")]
mod server {
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use ui::App;

    pub async fn run() {
        // Default Leptos config; site address comes from the environment.
        let conf = get_configuration(None).await.expect("load leptos config");
        let options = conf.leptos_options;
        let addr = options.site_addr;

        let app = Router::new()
            .leptos_routes(&options, generate_route_list(App), App)
            .with_state(options);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("bind ui listener");
        println!("tickerboard ui listening on http://{addr}");
        axum::serve(listener, app.into_make_service())
            .await
            .expect("serve ui");
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    server::run().await;
}

#[cfg(not(feature = "ssr"))]
fn main() {}
