mod aggregate;
mod backend;
mod classify;
mod corpus;
mod hallucination;
mod normalize;
mod patterns;
mod pipeline;
mod relation;
mod report;
mod run;
mod scoring;

pub(crate) use run::run;
