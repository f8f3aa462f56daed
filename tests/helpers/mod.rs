// Test Helper Modules
//
// Shared infrastructure for integration tests. Each test binary pulls this
// module in with `#[path = "../helpers/mod.rs"] mod helpers;`.
//
// Example:
//   #[actix_web::test]
//   async fn test_create_intent() {
//       let gateway = Arc::new(MockGateway::with_status("requires_payment_method"));
//       let srv = spawn_test_server(gateway.clone(), None);
//
//       let response = srv.post("/api/create-payment-intent")
//           .send_json(&TestDataFactory::intent_payload(1000))
//           .await
//           .unwrap();
//
//       assert_ok(&response);
//   }

#![allow(dead_code)]

pub mod assertions;
pub mod mock_gateway;
pub mod test_data;

// Re-export commonly used types and functions
pub use assertions::*;
pub use mock_gateway::*;
pub use test_data::*;
pub use test_server::*;
