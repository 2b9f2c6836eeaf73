//! Typed PTU A560 document.
//!
//! Every optional block is an `Option`, every repeated leaf a `Vec`, and the
//! element order lives in exactly one place: the [`DocumentVisitor`] walk
//! implemented here. The content digest and the XML serializer both consume
//! that walk, so they can never disagree on leaf order.
//!
//! All leaf strings are already sanitized and formatted by the builder.

use ndc_model::{PartyRole, TaxIdKind};

/// Namespace carried by the root element.
pub const A560_NAMESPACE: &str = "http://ptu.unimed.coop.br/schemas/V3_0";

pub const ROOT_TAG: &str = "ptuA560";

pub const HASH_TAG: &str = "hash";

/// Receives the document in schema order.
///
/// `open`/`close` bracket a block element, `leaf` is a text-only element.
pub trait DocumentVisitor {
    type Error;

    fn open(&mut self, tag: &'static str) -> Result<(), Self::Error>;
    fn leaf(&mut self, tag: &'static str, text: &str) -> Result<(), Self::Error>;
    fn close(&mut self, tag: &'static str) -> Result<(), Self::Error>;

    fn optional_leaf(&mut self, tag: &'static str, text: Option<&str>) -> Result<(), Self::Error> {
        match text {
            Some(text) => self.leaf(tag, text),
            None => Ok(()),
        }
    }
}

trait Visit {
    fn accept<V: DocumentVisitor>(&self, visitor: &mut V) -> Result<(), V::Error>;
}

/// A finished notice. Immutable: only the builder can construct one, and it
/// does so after the digest has been computed.
#[derive(Debug, Clone, PartialEq)]
pub struct A560Document {
    pub(crate) header: Header,
    pub(crate) body: NoticeBody,
    pub(crate) hash: String,
    pub(crate) postal_stamp: Option<PostalStamp>,
}

impl A560Document {
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn body(&self) -> &NoticeBody {
        &self.body
    }

    /// Lowercase hex MD5 of the hashed content.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn postal_stamp(&self) -> Option<&PostalStamp> {
        self.postal_stamp.as_ref()
    }

    /// Walk every element inside the root, digest and postal stamp included.
    pub fn accept<V: DocumentVisitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        self.accept_hashed(visitor)?;
        visitor.leaf(HASH_TAG, &self.hash)?;
        if let Some(stamp) = &self.postal_stamp {
            stamp.accept(visitor)?;
        }
        Ok(())
    }

    /// Walk only the elements covered by the digest.
    pub fn accept_hashed<V: DocumentVisitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        self.header.accept(visitor)?;
        self.body.accept(visitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub protocol_version: String,
    pub destination_unit: String,
    pub origin_unit: String,
    pub file_type: String,
    pub partial_flag: Option<String>,
}

impl Visit for Header {
    fn accept<V: DocumentVisitor>(&self, v: &mut V) -> Result<(), V::Error> {
        v.open("cabecalho")?;
        v.leaf("nrVerTra_PTU", &self.protocol_version)?;
        v.open("unimed")?;
        v.leaf("cd_Uni_Destino", &self.destination_unit)?;
        v.leaf("cd_Uni_Origem", &self.origin_unit)?;
        v.close("unimed")?;
        v.leaf("tp_arquivoNDC", &self.file_type)?;
        v.optional_leaf("tp_arq_parcial", self.partial_flag.as_deref())?;
        v.close("cabecalho")
    }
}

/// The `arquivoA560` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeBody {
    pub first: PrimaryDocument,
    pub second: Option<SecondaryDocument>,
    pub creditor: Party,
    pub debtor: Party,
}

impl Visit for NoticeBody {
    fn accept<V: DocumentVisitor>(&self, v: &mut V) -> Result<(), V::Error> {
        v.open("arquivoA560")?;
        self.first.accept(v)?;
        if let Some(second) = &self.second {
            second.accept(v)?;
        }
        self.creditor.accept(v)?;
        self.debtor.accept(v)?;
        v.close("arquivoA560")
    }
}

/// `Documento1`: the debit note is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryDocument {
    pub document_number: String,
    pub debit_note: DebitNote,
    pub slip: Option<BillingSlip>,
}

impl Visit for PrimaryDocument {
    fn accept<V: DocumentVisitor>(&self, v: &mut V) -> Result<(), V::Error> {
        v.open("Documento1")?;
        v.leaf("nr_Doc_Cob", &self.document_number)?;
        self.debit_note.accept(v)?;
        if let Some(slip) = &self.slip {
            slip.accept(v)?;
        }
        v.close("Documento1")
    }
}

/// `Documento2`: emitted only with a document number; its debit note is
/// emitted only with a note number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryDocument {
    pub document_number: String,
    pub debit_note: Option<DebitNote>,
    pub slip: Option<BillingSlip>,
}

impl Visit for SecondaryDocument {
    fn accept<V: DocumentVisitor>(&self, v: &mut V) -> Result<(), V::Error> {
        v.open("Documento2")?;
        v.leaf("nr_Doc_Cob", &self.document_number)?;
        if let Some(note) = &self.debit_note {
            note.accept(v)?;
        }
        if let Some(slip) = &self.slip {
            slip.accept(v)?;
        }
        v.close("Documento2")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebitNote {
    pub number: String,
    pub issue_date: String,
    pub due_date: String,
    pub amount: String,
    pub lines: Vec<NoteLine>,
}

impl Visit for DebitNote {
    fn accept<V: DocumentVisitor>(&self, v: &mut V) -> Result<(), V::Error> {
        v.open("Nota_Debito")?;
        v.leaf("nr_Nota_Debito", &self.number)?;
        v.leaf("dt_Emissao_NDC", &self.issue_date)?;
        v.leaf("dt_Ven_NDC", &self.due_date)?;
        v.leaf("vl_NDC", &self.amount)?;
        for line in &self.lines {
            v.open("Linha")?;
            v.leaf("nr_Linha", &line.position)?;
            v.leaf("ds_linha", &line.text)?;
            v.close("Linha")?;
        }
        v.close("Nota_Debito")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLine {
    /// Two-digit, 1-based position among the emitted lines.
    pub position: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingSlip {
    pub bank_code: String,
    pub agency_code: String,
    pub our_number: String,
    pub bank_usage: Option<String>,
    pub wallet: Option<String>,
    pub species: Option<String>,
    pub document_species: Option<String>,
    pub acceptance: Option<String>,
    pub processing_date: Option<String>,
    pub payment_place: String,
    pub payment_place_note: String,
    pub instructions: Vec<String>,
    pub observations: Vec<String>,
    pub digitable_line: String,
    pub barcode: String,
}

impl Visit for BillingSlip {
    fn accept<V: DocumentVisitor>(&self, v: &mut V) -> Result<(), V::Error> {
        v.open("Boleto")?;
        v.leaf("nr_Banco", &self.bank_code)?;
        v.leaf("agencia_Cd_Cedente", &self.agency_code)?;
        v.leaf("nosso_Numero", &self.our_number)?;
        v.optional_leaf("uso_banco", self.bank_usage.as_deref())?;
        v.optional_leaf("ds_carteira", self.wallet.as_deref())?;
        v.optional_leaf("especie", self.species.as_deref())?;
        v.optional_leaf("especie_doc", self.document_species.as_deref())?;
        v.optional_leaf("aceite", self.acceptance.as_deref())?;
        v.optional_leaf("dt_proces", self.processing_date.as_deref())?;
        v.leaf("local_pgto", &self.payment_place)?;
        v.leaf("obs_local_pagto", &self.payment_place_note)?;
        for instruction in &self.instructions {
            v.leaf("ds_instrucao", instruction)?;
        }
        for observation in &self.observations {
            v.leaf("ds_observacao", observation)?;
        }
        v.leaf("linha_digitavel", &self.digitable_line)?;
        v.leaf("cd_barras", &self.barcode)?;
        v.close("Boleto")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party {
    pub role: PartyRole,
    pub name: String,
    pub address: Address,
    pub tax_id: TaxId,
    pub phone: Option<Phone>,
}

impl Visit for Party {
    fn accept<V: DocumentVisitor>(&self, v: &mut V) -> Result<(), V::Error> {
        let block = self.role.block_tag();
        v.open(block)?;
        v.leaf(self.role.name_field(), &self.name)?;
        self.address.accept(v)?;
        v.open("cpf_cnpj")?;
        v.leaf(self.tax_id.kind.tag(), &self.tax_id.value)?;
        v.close("cpf_cnpj")?;
        if let Some(phone) = &self.phone {
            v.open("telefone")?;
            v.leaf("nr_ddd", &phone.area_code)?;
            v.leaf("nr_fone", &phone.number)?;
            v.close("telefone")?;
        }
        v.close(block)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// Two-digit street type code.
    pub street_type: String,
    pub street_name: String,
    pub number: String,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub municipality_code: String,
    pub postal_code: String,
}

impl Visit for Address {
    fn accept<V: DocumentVisitor>(&self, v: &mut V) -> Result<(), V::Error> {
        v.open("info_endereco")?;
        v.leaf("tp_logradouro", &self.street_type)?;
        v.leaf("ds_lograd", &self.street_name)?;
        v.leaf("nr_lograd", &self.number)?;
        v.optional_leaf("compl_lograd", self.complement.as_deref())?;
        v.optional_leaf("ds_bairro", self.neighborhood.as_deref())?;
        v.leaf("cd_munic", &self.municipality_code)?;
        v.leaf("nr_cep", &self.postal_code)?;
        v.close("info_endereco")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxId {
    pub kind: TaxIdKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    pub area_code: String,
    pub number: String,
}

/// `carimboCMB`: always serialized after the digest and never hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalStamp {
    pub posting_date: String,
    pub protocol_number: String,
}

impl Visit for PostalStamp {
    fn accept<V: DocumentVisitor>(&self, v: &mut V) -> Result<(), V::Error> {
        v.open("carimboCMB")?;
        v.leaf("dt_postagem", &self.posting_date)?;
        v.leaf("nr_protocolo", &self.protocol_number)?;
        v.close("carimboCMB")
    }
}
