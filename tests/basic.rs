use otter_twosat::{builder::ClauseOk, config::Config, context::Context, reports::Report};

mod basic {

    use otter_twosat::{
        context::ContextState,
        structures::{literal::Literal, valuation::Valuation},
        types::err::ErrorKind,
    };

    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literal();

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(p));

        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Satisfiable);
        assert_eq!(ctx.value_of(p.atom()), Some(true));
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause([p, q]).is_ok());
        assert!(ctx.add_clause([-p, -q]).is_ok());
        assert!(ctx.add_clause([p, -q]).is_ok());
        assert!(ctx.add_clause([-p, q]).is_ok());

        assert!(ctx.solve().is_ok());
        assert!(matches!(ctx.report(), Report::Unsatisfiable));
        assert!(ctx.unsatisfiable_atom().is_ok());
        assert_eq!(ctx.valuation().valued_atoms().count(), 0);
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause([p, q]));

        assert!(ctx.add_clause(-p).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of(p.atom()), Some(false));
        assert_eq!(ctx.value_of(q.atom()), Some(true));
    }

    #[test]
    fn one_clause() {
        let mut ctx = Context::from_config(Config::default());

        let [a, b] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause([a, b]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.counters.nodes, 4);
        assert_eq!(ctx.counters.edges, 2);

        let model = ctx.model().unwrap();
        assert!(model[0] || model[1]);
    }

    #[test]
    fn forced_both_ways() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_or_max_literal();

        assert!(ctx.add_clause([a, a]).is_ok());
        assert!(ctx.add_clause([-a, -a]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.unsatisfiable_atom(), Ok(a.atom()));
        assert_eq!(ctx.state, ContextState::Unsatisfiable(a.atom()));

        let components = ctx.components().unwrap();
        assert!(components.same_component(0, 1));
    }

    #[test]
    fn no_clauses() {
        let mut ctx = Context::from_config(Config::default());
        ctx.fresh_or_max_literals(4);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.components().map(|c| c.len()), Some(8));
        assert_eq!(ctx.valuation().unvalued_atoms().count(), 0);
    }

    #[test]
    fn resolve_after_input() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause([-p, q]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.counters.total_solves, 1);

        // A second solve without input returns the existing report.
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.counters.total_solves, 1);

        assert!(ctx.add_clause(p).is_ok());
        assert_eq!(ctx.report(), Report::Unknown);
        assert_eq!(ctx.value_of(q.atom()), None);
        assert!(ctx.components().is_none());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.counters.total_solves, 2);
        assert_eq!(ctx.value_of(p.atom()), Some(true));
        assert_eq!(ctx.value_of(q.atom()), Some(true));

        assert!(ctx.add_clause(-q).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn results_require_a_solve() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literal();
        assert!(ctx.add_clause(p).is_ok());

        assert_eq!(ctx.model(), Err(ErrorKind::InvalidState));
        assert_eq!(ctx.unsatisfiable_atom(), Err(ErrorKind::InvalidState));

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.model(), Ok(vec![true]));
        assert_eq!(ctx.unsatisfiable_atom(), Err(ErrorKind::InvalidState));
    }

    #[test]
    fn long_chain() {
        let mut ctx = Context::from_config(Config::default());

        let atoms = 100_000;
        let literals = ctx.fresh_or_max_literals(atoms);

        // l₀, and lᵢ → lᵢ₊₁
        assert!(ctx.add_clause(literals[0]).is_ok());
        for pair in literals.windows(2) {
            assert!(ctx.add_clause([-pair[0], pair[1]]).is_ok());
        }

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.valuation().values().all(|value| value == Some(true)));

        // ¬lₙ closes the chain into a contradiction.
        assert!(ctx.add_clause(-literals[atoms - 1]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }
}
