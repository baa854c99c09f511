use nq_matcher::{ip_belongs_to_network, MatchError};
use rhai::EvalAltResult;

fn invalid_unit_argument() -> Box<EvalAltResult> {
    let err = MatchError::InvalidFormat {
        value: "()".to_string(),
    };
    err.to_string().into()
}

/// Builds a script engine with the membership predicate registered.
///
/// Scripts call `ip_belongs_to_network(ip, network)` and get a boolean
/// back; a malformed argument aborts evaluation with a runtime error
/// carrying the matcher's message. Unit values (an absent argument in
/// script terms) fail the same way instead of as a signature mismatch.
pub fn build_engine() -> rhai::Engine {
    let mut engine = rhai::Engine::new();

    engine.register_fn(
        "ip_belongs_to_network",
        |ip: &str, network: &str| -> Result<bool, Box<EvalAltResult>> {
            ip_belongs_to_network(ip, network).map_err(|err| err.to_string().into())
        },
    );

    engine.register_fn(
        "ip_belongs_to_network",
        |_ip: (), _network: &str| -> Result<bool, Box<EvalAltResult>> {
            Err(invalid_unit_argument())
        },
    );

    engine.register_fn(
        "ip_belongs_to_network",
        |_ip: &str, _network: ()| -> Result<bool, Box<EvalAltResult>> {
            Err(invalid_unit_argument())
        },
    );

    engine.register_fn(
        "ip_belongs_to_network",
        |_ip: (), _network: ()| -> Result<bool, Box<EvalAltResult>> {
            Err(invalid_unit_argument())
        },
    );

    engine
}
