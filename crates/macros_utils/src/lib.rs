//! Route registration helpers.
//!
//! Each route module declares its handlers once with [`routes!`] and gets a
//! `routes(cfg)` function to hand to `App::configure`:
//!
//! ```ignore
//! macros_utils::routes! {
//!     route health_route,
//!     module websites,
//! }
//! ```
//!
//! `route` registers an actix handler service; `module` delegates to that
//! module's own generated `routes` function.

#[cfg(feature = "actix")]
pub use actix_web;

#[cfg(feature = "actix")]
#[macro_export]
macro_rules! routes {
    ($($body:tt)*) => {
        pub fn routes(cfg: &mut $crate::actix_web::web::ServiceConfig) {
            $crate::__register_routes!(cfg; $($body)*);
        }
    };
}

#[cfg(feature = "actix")]
#[doc(hidden)]
#[macro_export]
macro_rules! __register_routes {
    ($cfg:ident;) => {};
    ($cfg:ident; route $route:ident $(, $($rest:tt)*)?) => {
        $cfg.service($route);
        $crate::__register_routes!($cfg; $($($rest)*)?);
    };
    ($cfg:ident; module $module:ident $(, $($rest:tt)*)?) => {
        $module::routes($cfg);
        $crate::__register_routes!($cfg; $($($rest)*)?);
    };
}

#[cfg(all(test, feature = "actix"))]
mod tests {
    use actix_web::{App, HttpResponse, Responder, get, test};

    mod inner {
        use actix_web::{HttpResponse, Responder, get};

        crate::routes! {
            route pong,
        }

        #[get("/pong")]
        async fn pong() -> impl Responder {
            HttpResponse::Ok().body("pong")
        }
    }

    crate::routes! {
        route ping,
        module inner,
    }

    #[get("/ping")]
    async fn ping() -> impl Responder {
        HttpResponse::NoContent()
    }

    #[actix_web::test]
    async fn test_routes_registers_handlers_and_modules() {
        let app = test::init_service(App::new().configure(routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ping").to_request()).await;
        assert_eq!(resp.status(), 204);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/pong").to_request()).await;
        assert_eq!(resp.status(), 200);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
        assert_eq!(resp.status(), 404);
    }
}
