use candle_core::{Device, Result, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config, DTYPE};
use std::path::Path;
use std::sync::Arc;

struct BertSentenceEncoderImpl {
    bert: BertModel,
}

impl BertSentenceEncoderImpl {
    fn load(vb: VarBuilder, config: &Config) -> Result<Self> {
        // Sentence-transformer exports sometimes nest the weights under a
        // "bert." prefix; plain encoder exports do not.
        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), config)?
        } else {
            BertModel::load(vb.clone(), config)?
        };

        Ok(Self { bert })
    }

    /// Mean-pools the token hidden states into one sentence vector.
    fn forward(&self, input_ids: &Tensor, token_type_ids: &Tensor) -> Result<Tensor> {
        let hidden = self.bert.forward(input_ids, token_type_ids, None)?;
        let (_batch, seq_len, _hidden) = hidden.dims3()?;
        let pooled = (hidden.sum(1)? / (seq_len as f64))?;
        pooled.squeeze(0)
    }
}

/// Mean-pooling BERT sentence encoder loaded from a safetensors export.
#[derive(Clone)]
pub struct BertSentenceEncoder(Arc<BertSentenceEncoderImpl>);

impl BertSentenceEncoder {
    /// Loads `config.json` + `model.safetensors` from `model_dir`.
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle_core::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DTYPE, device)? };

        let model = BertSentenceEncoderImpl::load(vb, &config)?;

        Ok(Self(Arc::new(model)))
    }

    /// Encodes one tokenized sequence into an unnormalized sentence vector.
    pub fn forward(&self, input_ids: &Tensor, token_type_ids: &Tensor) -> Result<Tensor> {
        self.0.forward(input_ids, token_type_ids)
    }
}
